use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::auth::responses::{ProfileInfoResponse, RefreshTokenResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::dashboard::select_dashboard;
use crate::utils::jwt::JwtUtils;

use super::AuthService;

pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let Some(refresh_token) = JwtUtils::refresh_token_from(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let claims = match JwtUtils::verify_refresh_token(&refresh_token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::info!("Refresh token rejected: {}", e);
            return Ok(unauthorized_with_cleared_cookie());
        }
    };

    // 重新读取用户，删除或被拒绝的账号不能续期
    let storage = service.get_storage(request)?;
    let profile = match claims.profile_id() {
        Ok(id) => storage.get_profile_by_id(id).await.ok().flatten(),
        Err(_) => None,
    };
    let Some(profile) = profile.filter(|p| {
        p.approval_status != crate::models::profiles::entities::ApprovalStatus::Rejected
    }) else {
        return Ok(unauthorized_with_cleared_cookie());
    };

    match JwtUtils::generate_access_token(profile.id, &profile.role.to_string()) {
        Ok(access_token) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RefreshTokenResponse {
                access_token,
                expires_in: config.jwt.access_token_expiry * 60,
            },
            "Token refreshed successfully",
        ))),
        Err(e) => {
            tracing::error!("Failed to generate access token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Unable to refresh token",
                )),
            )
        }
    }
}

fn unauthorized_with_cleared_cookie() -> HttpResponse {
    HttpResponse::Unauthorized()
        .cookie(JwtUtils::refresh_cookie("", chrono::Duration::zero()))
        .json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Login expired or invalid, please login again",
        ))
}

pub async fn handle_me(request: &HttpRequest) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_profile(request) {
        Some(profile) => {
            let dashboard = profile
                .is_approved()
                .then(|| select_dashboard(profile.role, profile.sub_role));
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ProfileInfoResponse { profile, dashboard },
                "Profile retrieved successfully",
            )))
        }
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))),
    }
}

pub async fn handle_logout(request: &HttpRequest) -> ActixResult<HttpResponse> {
    if let Some(profile_id) = RequireJWT::extract_profile_id(request) {
        RequireJWT::forget_profile(request, profile_id).await;
    }
    Ok(HttpResponse::Ok()
        .cookie(JwtUtils::refresh_cookie("", chrono::Duration::zero()))
        .json(ApiResponse::success_empty("Logged out")))
}
