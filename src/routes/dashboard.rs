use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::profiles::entities::Role;
use crate::services::DashboardService;

static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn overview(request: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.overview(&request).await
}

pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/dashboard")
            .wrap(middlewares::RequireRole::new_any(Role::all_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(overview)),
    );
}
