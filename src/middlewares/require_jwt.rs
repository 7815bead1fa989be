/*!
 * JWT 认证中间件
 *
 * 验证 `Authorization: Bearer <token>` 中的 access token，并把对应的用户资料
 * 放入请求扩展中，供后续中间件和处理程序使用。
 *
 * ```rust,ignore
 * web::scope("/api/v1/dashboard")
 *     .wrap(RequireRole::new_any(Role::all_roles()))
 *     .wrap(RequireJWT)
 *     .route("", web::get().to(overview));
 * ```
 *
 * 用户资料以 `profile:{id}` 为键缓存。资料被修改、审批或删除时，
 * 服务层调用 [`RequireJWT::forget_profile`] 使缓存失效。
 */

use crate::cache::{CacheResult, ObjectCache, ObjectCacheExt};
use crate::config::AppConfig;
use crate::models::{ErrorCode, profiles::entities::Profile};
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

/// 资料缓存键
pub fn profile_cache_key(profile_id: i64) -> String {
    format!("profile:{profile_id}")
}

/// 根据 access token 解析用户资料：先查缓存，再查存储
pub async fn resolve_profile(
    token: &str,
    storage: &Arc<dyn Storage>,
    cache: Option<&Arc<dyn ObjectCache>>,
) -> Result<Profile, String> {
    let claims = JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;
    let profile_id = claims
        .profile_id()
        .map_err(|_| "Invalid profile ID in JWT".to_string())?;
    let key = profile_cache_key(profile_id);

    if let Some(cache) = cache {
        if let CacheResult::Found(profile) = cache.get_json::<Profile>(&key).await {
            return Ok(profile);
        }
        debug!("Profile {} not found in cache", profile_id);
    }

    let profile = storage
        .get_profile_by_id(profile_id)
        .await
        .map_err(|_| "Failed to retrieve profile from storage".to_string())?
        .ok_or_else(|| "Profile not found".to_string())?;

    if let Some(cache) = cache {
        cache
            .insert_json(key, &profile, AppConfig::get().cache.default_ttl)
            .await;
    }

    Ok(profile)
}

// 辅助函数：提取并验证 JWT access token
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<Profile, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|s| s.get_ref().clone())
        .ok_or_else(|| "Storage is not configured".to_string())?;
    let cache = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|c| c.get_ref().clone());

    resolve_profile(token, &storage, cache.as_ref()).await
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            match extract_and_validate_jwt(&req).await {
                Ok(profile) => {
                    debug!("JWT authentication successful for ID: {}", profile.id);
                    req.extensions_mut().insert(profile);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireJWT {
    /// 从请求扩展中提取用户资料
    pub fn extract_profile(req: &HttpRequest) -> Option<Profile> {
        req.extensions().get::<Profile>().cloned()
    }

    pub fn extract_profile_id(req: &HttpRequest) -> Option<i64> {
        req.extensions().get::<Profile>().map(|profile| profile.id)
    }

    /// 使缓存中的用户资料失效
    pub async fn forget_profile(req: &HttpRequest, profile_id: i64) {
        if let Some(cache) = req.app_data::<web::Data<Arc<dyn ObjectCache>>>() {
            cache.remove(&profile_cache_key(profile_id)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::object_cache::moka::MokaCacheWrapper;
    use crate::models::profiles::entities::{ApprovalStatus, Role};
    use crate::models::profiles::requests::CreateProfileRequest;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    async fn seeded() -> (Arc<dyn Storage>, i64) {
        let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::in_memory().await.unwrap());
        let profile = storage
            .create_profile(CreateProfileRequest {
                email: "teacher@theaaryans.in".to_string(),
                password_hash: "hash".to_string(),
                full_name: "Meera Iyer".to_string(),
                role: Role::Professor,
                sub_role: None,
                approval_status: ApprovalStatus::Approved,
                phone: None,
                class_name: None,
            })
            .await
            .unwrap();
        (storage, profile.id)
    }

    #[tokio::test]
    async fn test_profile_is_cached_after_first_lookup() {
        let (storage, id) = seeded().await;
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(100, 60));
        let token = JwtUtils::generate_access_token(id, "professor").unwrap();

        let profile = resolve_profile(&token, &storage, Some(&cache)).await.unwrap();
        assert_eq!(profile.id, id);
        assert!(
            cache
                .get_json::<Profile>(&profile_cache_key(id))
                .await
                .found()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_invalid_token_is_rejected() {
        let (storage, _) = seeded().await;
        assert!(resolve_profile("not-a-token", &storage, None).await.is_err());
    }
}
