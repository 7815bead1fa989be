use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::cache::ObjectCache;
use crate::middlewares;
use crate::middlewares::require_jwt::resolve_profile;
use crate::middlewares::require_role::check_access;
use crate::models::profiles::entities::Role;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::NotificationService;
use crate::services::websocket::WebSocketService;
use crate::storage::Storage;

static NOTIFICATION_SERVICE: Lazy<NotificationService> = Lazy::new(NotificationService::new_lazy);

#[derive(Debug, Deserialize)]
pub struct WsQuery {
    token: String,
}

pub async fn pending_approvals(request: HttpRequest) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.pending_approvals(&request).await
}

/// 浏览器无法为 WebSocket 设置请求头，令牌通过查询参数传递
pub async fn connect(
    req: HttpRequest,
    body: web::Payload,
    query: web::Query<WsQuery>,
    storage: web::Data<Arc<dyn Storage>>,
    cache: Option<web::Data<Arc<dyn ObjectCache>>>,
) -> ActixResult<HttpResponse> {
    let storage = storage.get_ref().clone();
    let cache = cache.map(|c| c.get_ref().clone());

    let profile = match resolve_profile(&query.token, &storage, cache.as_ref()).await {
        Ok(profile) => profile,
        Err(err) => {
            info!("WebSocket authentication failed: {}", err);
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                format!("Unauthorized: {err}"),
            )));
        }
    };

    if let Err((status, code, message)) = check_access(&profile, &[Role::Admin]) {
        return Ok(HttpResponse::build(status).json(ApiResponse::error_empty(code, message)));
    }

    let initial_pending = storage.count_pending_profiles().await.ok();
    let (response, session, stream) = actix_ws::handle(&req, body)?;

    actix_web::rt::spawn(WebSocketService::handle_connection(
        profile.id,
        session,
        stream,
        initial_pending,
    ));

    Ok(response)
}

pub fn configure_notification_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/v1/ws", web::get().to(connect)).service(
        web::scope("/api/v1/notifications")
            .wrap(middlewares::RequireRole::new(&Role::Admin))
            .wrap(middlewares::RequireJWT)
            .route("/pending-approvals", web::get().to(pending_approvals)),
    );
}
