use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::profiles::{
    entities::{ApprovalStatus, Role},
    requests::{CreateProfileRequest, RegisterRequest},
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::notifications::publish_pending_count;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_full_name, validate_password, validate_phone};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let email = register_request.email.trim().to_lowercase();

    if let Err(msg) = validate_email(&email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::EmailInvalid, msg)));
    }
    if let Err(msg) = validate_full_name(&register_request.full_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Some(phone) = register_request.phone.as_deref()
        && let Err(msg) = validate_phone(phone)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Err(msg) = validate_password(&register_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordPolicyViolation, msg)));
    }
    // 管理员账号只能由现有管理员提升，不能自助注册
    if register_request.role == Role::Admin {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Administrator accounts cannot be self-registered",
        )));
    }

    let storage = service.get_storage(request)?;

    match storage.get_profile_by_email(&email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EmailAlreadyExists,
                "Email already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Register failed: {e}"),
                )),
            );
        }
    }

    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Register failed: {e}"),
                )),
            );
        }
    };

    let create = CreateProfileRequest {
        email,
        password_hash,
        full_name: register_request.full_name.trim().to_string(),
        role: register_request.role,
        sub_role: None,
        approval_status: ApprovalStatus::Pending,
        phone: register_request.phone,
        class_name: register_request.class_name,
    };

    match storage.create_profile(create).await {
        Ok(profile) => {
            tracing::info!(
                "New {} registration pending approval: {}",
                profile.role,
                profile.id
            );
            publish_pending_count(&storage).await;
            Ok(HttpResponse::Created().json(ApiResponse::success(
                profile,
                "Registration submitted, awaiting administrator approval",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("Register failed: {e}"),
            )),
        ),
    }
}
