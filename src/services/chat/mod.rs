pub mod client;
pub mod fallback;
pub mod transcript;

pub use client::{ChatClient, ChatError};
pub use fallback::fallback_answer;
pub use transcript::TranscriptStore;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::config::{AppConfig, ChatConfig};
use crate::models::chat::{
    entities::{ChatMessage, ReplySource},
    requests::ChatRequest,
    responses::{ChatReply, TranscriptResponse},
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::SafeSessionId;

const MAX_MESSAGE_CHARS: usize = 1000;

/// 记录一轮问答：先写入用户消息，AI 失败时改用关键词回答
pub async fn reply(
    client: &ChatClient,
    store: &TranscriptStore,
    config: &ChatConfig,
    session_id: String,
    message: &str,
) -> ChatReply {
    store.append(&session_id, ChatMessage::user(message)).await;

    let (response, source) = match client.complete(message).await {
        Ok(answer) => (answer, ReplySource::Ai),
        Err(ChatError::Disabled) => (fallback_answer(message, config), ReplySource::Fallback),
        Err(e) => {
            warn!("Chat completion failed for session {}: {}", session_id, e);
            (fallback_answer(message, config), ReplySource::Fallback)
        }
    };

    store
        .append(&session_id, ChatMessage::assistant(response.clone()))
        .await;

    ChatReply {
        session_id,
        response,
        source,
    }
}

pub struct ChatService {
    client: OnceCell<ChatClient>,
}

impl ChatService {
    pub fn new_lazy() -> Self {
        Self {
            client: OnceCell::new(),
        }
    }

    fn get_client(&self) -> ActixResult<&ChatClient> {
        self.client.get_or_try_init(|| {
            ChatClient::new(&AppConfig::get().chat).map_err(|e| {
                actix_web::error::ErrorInternalServerError(format!(
                    "Failed to build chat client: {e}"
                ))
            })
        })
    }

    fn get_store(&self, request: &HttpRequest) -> ActixResult<TranscriptStore> {
        let cache = super::cache_from(request)?;
        Ok(TranscriptStore::new(
            cache,
            AppConfig::get().chat.transcript_ttl,
        ))
    }

    pub async fn send(&self, request: &HttpRequest, body: ChatRequest) -> ActixResult<HttpResponse> {
        let message = body.message.trim();
        if message.is_empty() {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                "Message is required",
            )));
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                format!("Message must be at most {MAX_MESSAGE_CHARS} characters"),
            )));
        }

        let session_id = match body.session_id {
            Some(id) if SafeSessionId::is_valid(&id) => id,
            Some(_) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Invalid chat session id",
                )));
            }
            None => uuid::Uuid::new_v4().to_string(),
        };

        let client = self.get_client()?;
        let store = self.get_store(request)?;
        let reply = reply(client, &store, &AppConfig::get().chat, session_id, message).await;
        info!(
            "Chat reply for session {} served from {:?}",
            reply.session_id, reply.source
        );

        Ok(HttpResponse::Ok().json(ApiResponse::success(reply, "Reply generated")))
    }

    pub async fn transcript(
        &self,
        request: &HttpRequest,
        session_id: String,
    ) -> ActixResult<HttpResponse> {
        let store = self.get_store(request)?;
        let messages = store.read(&session_id).await;
        Ok(HttpResponse::Ok().json(ApiResponse::success(
            TranscriptResponse {
                session_id,
                messages,
            },
            "Transcript loaded",
        )))
    }

    pub async fn clear(&self, request: &HttpRequest, session_id: String) -> ActixResult<HttpResponse> {
        let store = self.get_store(request)?;
        store.clear(&session_id).await;
        Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Transcript cleared")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ObjectCache;
    use crate::cache::object_cache::moka::MokaCacheWrapper;
    use crate::models::chat::entities::Speaker;
    use std::sync::Arc;

    fn store() -> TranscriptStore {
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(100, 60));
        TranscriptStore::new(cache, 60)
    }

    #[tokio::test]
    async fn test_disabled_client_uses_fallback_and_records_both_turns() {
        let config = ChatConfig::default();
        let client = ChatClient::new(&config).unwrap();
        let store = store();

        let reply = reply(
            &client,
            &store,
            &config,
            "session-0001".to_string(),
            "Tell me about admission",
        )
        .await;
        assert_eq!(reply.source, ReplySource::Fallback);
        assert_eq!(reply.response, fallback::ADMISSIONS_ANSWER);

        let messages = store.read("session-0001").await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Speaker::User);
        assert_eq!(messages[1].role, Speaker::Assistant);
        assert_eq!(messages[1].content, reply.response);
    }

    #[tokio::test]
    async fn test_network_failure_falls_back() {
        let config = ChatConfig {
            endpoint: "http://127.0.0.1:9/chat".to_string(),
            timeout_ms: 2_000,
            ..ChatConfig::default()
        };
        let client = ChatClient::new(&config).unwrap();
        let reply = reply(&client, &store(), &config, "session-0002".to_string(), "hi").await;
        assert_eq!(reply.source, ReplySource::Fallback);
        assert!(reply.response.contains(&config.school_email));
    }
}
