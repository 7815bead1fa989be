use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfileService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::notifications::publish_pending_count;
use crate::services::websocket::ConnectionManager;

pub async fn delete_profile(
    service: &ProfileService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if RequireJWT::extract_profile_id(request) == Some(id) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ProfileDeleteFailed,
            "You cannot delete your own account",
        )));
    }

    let storage = service.get_storage(request)?;

    match storage.delete_profile(id).await {
        Ok(true) => {
            RequireJWT::forget_profile(request, id).await;
            ConnectionManager::get().disconnect(id);
            publish_pending_count(&storage).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Profile deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProfileNotFound,
            "Profile not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ProfileDeleteFailed,
                format!("Failed to delete profile: {e}"),
            )),
        ),
    }
}
