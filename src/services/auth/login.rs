use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
    profiles::entities::ApprovalStatus,
};
use crate::services::dashboard::select_dashboard;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;

const BAD_CREDENTIALS: &str = "Email or password is incorrect";

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let config = service.get_config();

    let profile = match storage.get_profile_by_email(&login_request.email).await {
        Ok(Some(profile)) if verify_password(&login_request.password, &profile.password_hash) => {
            profile
        }
        Ok(_) => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::AuthFailed, BAD_CREDENTIALS)));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login failed: {e}"),
                )),
            );
        }
    };

    // 被拒绝的注册不能登录；待审批的可以登录但只能看到等待页面
    if profile.approval_status == ApprovalStatus::Rejected {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ApprovalRejected,
            "Your registration was rejected, please contact the school office",
        )));
    }

    if let Err(e) = storage.update_last_login(profile.id).await {
        tracing::warn!("Failed to update last login for {}: {}", profile.id, e);
    }

    let refresh_ttl = if login_request.remember_me {
        chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)
    } else {
        chrono::Duration::days(config.jwt.refresh_token_expiry)
    };

    let token_pair = match profile.generate_token_pair(Some(refresh_ttl)) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            );
        }
    };

    tracing::info!("Profile {} logged in", profile.id);

    let dashboard = profile
        .is_approved()
        .then(|| select_dashboard(profile.role, profile.sub_role));
    let response = LoginResponse {
        access_token: token_pair.access_token,
        expires_in: config.jwt.access_token_expiry * 60,
        profile,
        dashboard,
        created_at: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok()
        .cookie(JwtUtils::refresh_cookie(&token_pair.refresh_token, refresh_ttl))
        .json(ApiResponse::success(response, "Login successful")))
}
