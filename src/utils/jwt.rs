//! 访问令牌与刷新令牌
//!
//! access token 放在 `Authorization: Bearer`，refresh token 只通过 HttpOnly cookie 下发。

use actix_web::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

pub const REFRESH_COOKIE: &str = "refresh_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// profile id
    pub sub: String,
    pub role: String,
    pub kind: TokenKind,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn profile_id(&self) -> Result<i64, JwtError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| JwtError::from(ErrorKind::InvalidSubject))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn secret() -> &'static [u8] {
        AppConfig::get().jwt.secret.as_bytes()
    }

    fn sign(
        secret: &[u8],
        profile_id: i64,
        role: &str,
        kind: TokenKind,
        ttl: Duration,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: profile_id.to_string(),
            role: role.to_string(),
            kind,
            exp: (now + ttl).timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
    }

    fn check(secret: &[u8], token: &str, expected: TokenKind) -> Result<Claims, JwtError> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret),
            &Validation::default(),
        )?
        .claims;
        if claims.kind != expected {
            return Err(JwtError::from(ErrorKind::InvalidToken));
        }
        Ok(claims)
    }

    pub fn generate_access_token(profile_id: i64, role: &str) -> Result<String, JwtError> {
        let ttl = Duration::minutes(AppConfig::get().jwt.access_token_expiry);
        Self::sign(Self::secret(), profile_id, role, TokenKind::Access, ttl)
    }

    /// `refresh_ttl` 为空时使用默认的刷新令牌有效期
    pub fn generate_token_pair(
        profile_id: i64,
        role: &str,
        refresh_ttl: Option<Duration>,
    ) -> Result<TokenPair, JwtError> {
        let refresh_ttl = refresh_ttl
            .unwrap_or_else(|| Duration::days(AppConfig::get().jwt.refresh_token_expiry));
        Ok(TokenPair {
            access_token: Self::generate_access_token(profile_id, role)?,
            refresh_token: Self::sign(
                Self::secret(),
                profile_id,
                role,
                TokenKind::Refresh,
                refresh_ttl,
            )?,
        })
    }

    pub fn verify_access_token(token: &str) -> Result<Claims, JwtError> {
        Self::check(Self::secret(), token, TokenKind::Access)
    }

    pub fn verify_refresh_token(token: &str) -> Result<Claims, JwtError> {
        Self::check(Self::secret(), token, TokenKind::Refresh)
    }

    pub fn refresh_cookie(refresh_token: &str, ttl: Duration) -> Cookie<'static> {
        Cookie::build(REFRESH_COOKIE, refresh_token.to_string())
            .path("/api/v1/auth")
            .max_age(actix_web::cookie::time::Duration::seconds(ttl.num_seconds()))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    pub fn refresh_token_from(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_COOKIE).map(|c| c.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"unit-test-secret";

    #[test]
    fn test_access_token_roundtrip() {
        let token =
            JwtUtils::sign(SECRET, 42, "admin", TokenKind::Access, Duration::minutes(5)).unwrap();
        let claims = JwtUtils::check(SECRET, &token, TokenKind::Access).unwrap();
        assert_eq!(claims.profile_id().unwrap(), 42);
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let token =
            JwtUtils::sign(SECRET, 7, "student", TokenKind::Refresh, Duration::days(1)).unwrap();
        assert!(JwtUtils::check(SECRET, &token, TokenKind::Access).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let token =
            JwtUtils::sign(SECRET, 7, "student", TokenKind::Access, Duration::hours(-2)).unwrap();
        assert!(JwtUtils::check(SECRET, &token, TokenKind::Access).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token =
            JwtUtils::sign(SECRET, 7, "student", TokenKind::Access, Duration::minutes(5)).unwrap();
        assert!(JwtUtils::check(b"other-secret", &token, TokenKind::Access).is_err());
    }
}
