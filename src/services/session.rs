//! Session Verification
//!
//! Identity provider(Supabase Auth)가 발급한 access token 검증.
//!
//! - HS256 서명, 프로젝트 JWT 시크릿으로 검증
//! - `aud`는 로그인 사용자용 `authenticated`
//! - `sub`가 사용자 ID (UUID)
//!
//! 토큰 발급/갱신은 provider 담당이고, 이 서버는 검증만 한다.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// 로그인 사용자 토큰의 audience
pub const AUTHENTICATED_AUDIENCE: &str = "authenticated";

/// access token payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 사용자 ID
    pub sub: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

/// 검증된 세션
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: UserId,
    pub email: Option<String>,
    /// provider 호출(sign out 등)에 그대로 전달
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// 세션 토큰 검증기
#[derive(Clone)]
pub struct SessionVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl SessionVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[AUTHENTICATED_AUDIENCE]);

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// 토큰 검증. 서명 불일치/만료/형식 오류는 모두 `None`
    pub fn verify(&self, token: &str) -> Option<Session> {
        match decode::<Claims>(token, &self.key, &self.validation) {
            Ok(data) => {
                let claims = data.claims;
                Some(Session {
                    user_id: claims.sub,
                    email: claims.email,
                    access_token: token.to_string(),
                    expires_at: Utc
                        .timestamp_opt(claims.exp, 0)
                        .single()
                        .unwrap_or_else(Utc::now),
                })
            }
            Err(err) => {
                use jsonwebtoken::errors::ErrorKind;
                let reason = match err.kind() {
                    ErrorKind::ExpiredSignature => "token expired",
                    ErrorKind::InvalidSignature => "invalid signature",
                    ErrorKind::InvalidAudience => "invalid audience",
                    _ => "token validation failed",
                };
                tracing::debug!("Rejected session token: {}", reason);
                None
            }
        }
    }

    /// 요청 헤더에서 현재 세션 조회 (`Authorization: Bearer <token>`)
    pub fn current_session(&self, headers: &HeaderMap) -> Option<Session> {
        bearer_token(headers).and_then(|token| self.verify(token))
    }
}

/// `Authorization` 헤더의 bearer 토큰
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))?
        .trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    pub(crate) const SECRET: &str = "test-secret-with-enough-length-for-hs256";

    pub(crate) fn token_for(user: UserId, secret: &str, exp_offset_secs: i64, aud: &str) -> String {
        let claims = Claims {
            sub: user,
            email: Some("ash@pallet.town".to_string()),
            role: Some("authenticated".to_string()),
            aud: Some(aud.to_string()),
            exp: Utc::now().timestamp() + exp_offset_secs,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_valid_token() {
        let verifier = SessionVerifier::new(SECRET);
        let user = Uuid::new_v4();
        let token = token_for(user, SECRET, 3600, AUTHENTICATED_AUDIENCE);

        let session = verifier
            .current_session(&headers_with(&format!("Bearer {}", token)))
            .unwrap();
        assert_eq!(session.user_id, user);
        assert_eq!(session.email.as_deref(), Some("ash@pallet.town"));
        assert_eq!(session.access_token, token);
        assert!(session.expires_at > Utc::now());
    }

    #[test]
    fn test_expired_token() {
        let verifier = SessionVerifier::new(SECRET);
        let token = token_for(Uuid::new_v4(), SECRET, -3600, AUTHENTICATED_AUDIENCE);
        assert!(verifier.verify(&token).is_none());
    }

    #[test]
    fn test_wrong_secret() {
        let verifier = SessionVerifier::new(SECRET);
        let token = token_for(Uuid::new_v4(), "another-secret-another-secret-123", 3600, AUTHENTICATED_AUDIENCE);
        assert!(verifier.verify(&token).is_none());
    }

    #[test]
    fn test_anon_audience_rejected() {
        let verifier = SessionVerifier::new(SECRET);
        let token = token_for(Uuid::new_v4(), SECRET, 3600, "anon");
        assert!(verifier.verify(&token).is_none());
    }

    #[test]
    fn test_missing_or_malformed_header() {
        let verifier = SessionVerifier::new(SECRET);
        assert!(verifier.current_session(&HeaderMap::new()).is_none());
        assert!(verifier.current_session(&headers_with("Basic abc")).is_none());
        assert!(verifier.current_session(&headers_with("Bearer ")).is_none());
        assert!(verifier.current_session(&headers_with("Bearer not.a.jwt")).is_none());
    }
}
