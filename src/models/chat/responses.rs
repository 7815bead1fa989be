use serde::{Deserialize, Serialize};

use super::entities::{ChatMessage, ReplySource};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatReply {
    pub session_id: String,
    pub response: String,
    pub source: ReplySource,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
}

// AI 接口的响应体
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub response: String,
}
