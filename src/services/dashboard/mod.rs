pub mod select;

pub use select::{navigation_for, select_dashboard};

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::dashboard::responses::DashboardResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from(request),
        }
    }

    /// 当前用户的仪表盘：类型、导航与实时统计
    pub async fn overview(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let Some(profile) = RequireJWT::extract_profile(request) else {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access, please login",
            )));
        };

        let variant = select_dashboard(profile.role, profile.sub_role);
        let storage = self.get_storage(request)?;

        match storage.dashboard_stats().await {
            Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                DashboardResponse {
                    variant,
                    navigation: navigation_for(variant),
                    stats,
                    profile,
                },
                "Dashboard loaded",
            ))),
            Err(e) => Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load dashboard statistics: {e}"),
                )),
            ),
        }
    }
}
