use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfileService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    profiles::{entities::Role, requests::UpdateProfileRequest, responses::ProfileResponse},
};
use crate::services::websocket::ConnectionManager;
use crate::utils::validate::{validate_full_name, validate_phone};

const MAX_DUTIES: usize = 20;

fn validate_update(update: &UpdateProfileRequest) -> Result<(), &'static str> {
    if let Some(name) = update.full_name.as_deref() {
        validate_full_name(name)?;
    }
    if let Some(phone) = update.phone.as_deref() {
        validate_phone(phone)?;
    }
    if let Some(duties) = &update.duties
        && duties.len() > MAX_DUTIES
    {
        return Err("At most 20 duties can be assigned");
    }
    Ok(())
}

pub async fn update_profile(
    service: &ProfileService,
    id: i64,
    update: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_update(&update) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let storage = service.get_storage(request)?;
    let existing = match storage.get_profile_by_id(id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ProfileNotFound,
                "Profile not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ProfileUpdateFailed,
                    format!("Failed to update profile: {e}"),
                )),
            );
        }
    };

    let role = update.role.unwrap_or(existing.role);
    if let Some(Some(sub_role)) = update.sub_role
        && !role.accepts_sub_role(sub_role)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            format!("Sub-role '{sub_role}' is not valid for role '{role}'"),
        )));
    }

    // 防止管理员把自己降级后失去管理权限
    if RequireJWT::extract_profile_id(request) == Some(id) && role != Role::Admin {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "You cannot remove your own administrator role",
        )));
    }

    match storage.update_profile(id, update).await {
        Ok(Some(profile)) => {
            RequireJWT::forget_profile(request, id).await;
            if existing.role == Role::Admin && profile.role != Role::Admin {
                ConnectionManager::get().disconnect(id);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ProfileResponse { profile },
                "Profile updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProfileNotFound,
            "Profile not found",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ProfileUpdateFailed,
            format!("Failed to update profile: {e}"),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_validation() {
        assert!(validate_update(&UpdateProfileRequest::default()).is_ok());
        let too_many = UpdateProfileRequest {
            duties: Some(vec!["Duty".to_string(); MAX_DUTIES + 1]),
            ..Default::default()
        };
        assert!(validate_update(&too_many).is_err());
        let blank_name = UpdateProfileRequest {
            full_name: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(validate_update(&blank_name).is_err());
    }
}
