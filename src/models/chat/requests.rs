use serde::{Deserialize, Serialize};

// 聊天请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub session_id: Option<String>,
    pub message: String,
}

// 发往 AI 接口的请求体
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub message: &'a str,
    pub context: &'a str,
}
