use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::config::AppConfig;
use crate::models::{ApiResponse, AppStartTime, system::responses::HealthResponse};

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let now = chrono::Utc::now();
        let uptime_seconds = request
            .app_data::<web::Data<AppStartTime>>()
            .map(|start| now.signed_duration_since(start.start_datetime).num_seconds())
            .unwrap_or(0);

        let response = HealthResponse {
            status: "ok",
            system_name: AppConfig::get().app.system_name.clone(),
            version: env!("CARGO_PKG_VERSION"),
            uptime_seconds,
        };

        Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Service is healthy")))
    }
}
