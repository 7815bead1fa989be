use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfileService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    profiles::{requests::ApprovalRequest, responses::ProfileResponse},
};
use crate::services::notifications::publish_pending_count;

pub async fn set_approval(
    service: &ProfileService,
    id: i64,
    approval: ApprovalRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if RequireJWT::extract_profile_id(request) == Some(id) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "You cannot change your own approval status",
        )));
    }

    let storage = service.get_storage(request)?;

    match storage.set_approval_status(id, approval.status).await {
        Ok(Some(profile)) => {
            tracing::info!("Profile {} marked as {}", id, profile.approval_status);
            RequireJWT::forget_profile(request, id).await;
            publish_pending_count(&storage).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ProfileResponse { profile },
                "Approval status updated",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProfileNotFound,
            "Profile not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ProfileUpdateFailed,
                format!("Failed to update approval status: {e}"),
            )),
        ),
    }
}
