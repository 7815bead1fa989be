//! 安全的路径参数提取器
//!
//! 在进入处理函数之前校验路径参数，非法值直接返回 400。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ApiResponse, ErrorCode};

static SESSION_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{8,64}$").expect("Invalid session id regex"));

fn bad_request(message: &str) -> actix_web::Error {
    InternalError::from_response(
        message.to_string(),
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

/// 路径中的 `{id}`，必须为正整数
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|id| *id > 0);

        ready(match parsed {
            Some(id) => Ok(SafeIDI64(id)),
            None => Err(bad_request("Invalid id parameter")),
        })
    }
}

/// 路径中的 `{session}`，聊天会话 ID
#[derive(Debug, Clone)]
pub struct SafeSessionId(pub String);

impl SafeSessionId {
    pub fn is_valid(raw: &str) -> bool {
        SESSION_ID_RE.is_match(raw)
    }
}

impl FromRequest for SafeSessionId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match req.match_info().get("session") {
            Some(raw) if Self::is_valid(raw) => Ok(SafeSessionId(raw.to_string())),
            _ => Err(bad_request("Invalid chat session id")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_format() {
        assert!(SafeSessionId::is_valid("3f2b6c1e-9d7a-4c1b-8f3e-2a1b0c9d8e7f"));
        assert!(!SafeSessionId::is_valid("short"));
        assert!(!SafeSessionId::is_valid("../../etc/passwd"));
    }
}
