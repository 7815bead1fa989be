use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfileService;
use crate::models::{ApiResponse, ErrorCode, profiles::responses::ProfileResponse};

pub async fn get_profile(
    service: &ProfileService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_profile_by_id(id).await {
        Ok(Some(profile)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProfileResponse { profile },
            "Profile retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProfileNotFound,
            "Profile not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve profile: {e}"),
            )),
        ),
    }
}
