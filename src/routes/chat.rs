use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::chat::requests::ChatRequest;
use crate::services::ChatService;
use crate::utils::SafeSessionId;

// 懒加载的全局 ChatService 实例
static CHAT_SERVICE: Lazy<ChatService> = Lazy::new(ChatService::new_lazy);

pub async fn send_message(
    request: HttpRequest,
    body: web::Json<ChatRequest>,
) -> ActixResult<HttpResponse> {
    CHAT_SERVICE.send(&request, body.into_inner()).await
}

pub async fn get_transcript(
    request: HttpRequest,
    session: SafeSessionId,
) -> ActixResult<HttpResponse> {
    CHAT_SERVICE.transcript(&request, session.0).await
}

pub async fn clear_transcript(
    request: HttpRequest,
    session: SafeSessionId,
) -> ActixResult<HttpResponse> {
    CHAT_SERVICE.clear(&request, session.0).await
}

// 官网聊天助手，无需登录
pub fn configure_chat_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/chat")
            .wrap(middlewares::RateLimit::chat())
            .route("", web::post().to(send_message))
            .route("/{session}", web::get().to(get_transcript))
            .route("/{session}", web::delete().to(clear_transcript)),
    );
}
