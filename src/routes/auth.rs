//! Session Extraction & Sign Out
//!
//! # Interview Q&A
//!
//! Q: 인증은 어디서 처리하는가?
//! A: 핸들러 인자로 받는 extractor에서 처리
//!    - `CurrentSession`을 인자로 선언한 핸들러만 인증 필요
//!    - 세션이 없으면 핸들러 실행 전에 401 반환
//!    - 로그인/토큰 갱신은 identity provider가 담당 (이 서버는 검증만)

use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{request::Parts, StatusCode},
};

use crate::{error::{ApiError, ProgressError}, services::Session, AppState};

/// 인증된 요청의 세션
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .sessions
            .current_session(&parts.headers)
            .map(CurrentSession)
            .ok_or_else(|| ProgressError::AuthenticationRequired.into())
    }
}

/// POST /auth/signout
///
/// provider 측 세션 종료. 성공 시 204
pub async fn sign_out(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<StatusCode, ApiError> {
    state
        .identity
        .sign_out(&session.access_token)
        .await
        .map_err(|e: anyhow::Error| {
            tracing::warn!("Sign out failed: {:?}", e);
            ApiError::ServiceUnavailable("Identity provider".to_string())
        })?;

    tracing::info!(user_id = %session.user_id, "Signed out");
    Ok(StatusCode::NO_CONTENT)
}
