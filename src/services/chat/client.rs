//! AI 问答接口客户端
//!
//! 请求体 `{message, context}`，响应体 `{response}`。

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;

use crate::config::ChatConfig;
use crate::errors::Result;
use crate::models::chat::{requests::CompletionRequest, responses::CompletionResponse};

/// 调用失败的类别，决定日志级别与回退方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// 未配置接口地址
    Disabled,
    RateLimited,
    Unauthorized,
    Server(u16),
    UnexpectedStatus(u16),
    Network(String),
    InvalidResponse(String),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Disabled => write!(f, "AI endpoint is not configured"),
            ChatError::RateLimited => write!(f, "AI endpoint rate limit exceeded"),
            ChatError::Unauthorized => write!(f, "AI endpoint rejected the credentials"),
            ChatError::Server(code) => write!(f, "AI endpoint server error ({code})"),
            ChatError::UnexpectedStatus(code) => {
                write!(f, "AI endpoint returned unexpected status {code}")
            }
            ChatError::Network(e) => write!(f, "AI endpoint unreachable: {e}"),
            ChatError::InvalidResponse(e) => write!(f, "AI endpoint returned invalid body: {e}"),
        }
    }
}

impl std::error::Error for ChatError {}

/// 2xx 返回 `None`
pub fn classify_status(status: StatusCode) -> Option<ChatError> {
    if status.is_success() {
        return None;
    }
    Some(match status {
        StatusCode::TOO_MANY_REQUESTS => ChatError::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ChatError::Unauthorized,
        s if s.is_server_error() => ChatError::Server(s.as_u16()),
        s => ChatError::UnexpectedStatus(s.as_u16()),
    })
}

pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    context: String,
}

impl ChatClient {
    pub fn new(config: &ChatConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim().to_string(),
            api_key: config.api_key.clone(),
            context: config.school_context.clone(),
        })
    }

    pub fn is_enabled(&self) -> bool {
        !self.endpoint.is_empty()
    }

    pub async fn complete(&self, message: &str) -> std::result::Result<String, ChatError> {
        if !self.is_enabled() {
            return Err(ChatError::Disabled);
        }

        let mut request = self.http.post(&self.endpoint).json(&CompletionRequest {
            message,
            context: &self.context,
        });
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;
        if let Some(err) = classify_status(response.status()) {
            return Err(err);
        }

        let body = response
            .json::<CompletionResponse>()
            .await
            .map_err(|e| ChatError::InvalidResponse(e.to_string()))?;
        let answer = body.response.trim();
        if answer.is_empty() {
            return Err(ChatError::InvalidResponse("empty response".to_string()));
        }
        Ok(answer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        assert_eq!(classify_status(StatusCode::OK), None);
        assert_eq!(
            classify_status(StatusCode::TOO_MANY_REQUESTS),
            Some(ChatError::RateLimited)
        );
        assert_eq!(
            classify_status(StatusCode::UNAUTHORIZED),
            Some(ChatError::Unauthorized)
        );
        assert_eq!(
            classify_status(StatusCode::FORBIDDEN),
            Some(ChatError::Unauthorized)
        );
        assert_eq!(
            classify_status(StatusCode::BAD_GATEWAY),
            Some(ChatError::Server(502))
        );
        assert_eq!(
            classify_status(StatusCode::NOT_FOUND),
            Some(ChatError::UnexpectedStatus(404))
        );
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_disabled() {
        let client = ChatClient::new(&ChatConfig::default()).unwrap();
        assert!(!client.is_enabled());
        assert_eq!(client.complete("hello").await, Err(ChatError::Disabled));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let client = ChatClient::new(&ChatConfig {
            endpoint: "http://127.0.0.1:9/chat".to_string(),
            timeout_ms: 2_000,
            ..ChatConfig::default()
        })
        .unwrap();
        assert!(matches!(
            client.complete("hello").await,
            Err(ChatError::Network(_))
        ));
    }
}
