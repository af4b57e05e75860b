//! Error Handling Module
//!
//! Provides type-safe error handling with proper HTTP status code mapping.
//! `ProgressError` is the domain taxonomy returned by the store and the aggregator;
//! `ApiError` maps it (and everything else) onto HTTP responses.

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// 진행도 도메인 에러
///
/// # Design Decision
///
/// 백엔드 고유 에러 코드(예: Postgres `42P01`)는 store 구현 내부에서만 해석하고,
/// 비즈니스 로직은 이 enum만 보고 분기한다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    /// 활성 세션 없음 → 로그인 필요
    #[error("Authentication required")]
    AuthenticationRequired,

    /// 대상 테이블 없음 → 1회 프로비저닝 후 재시도
    #[error("Relation does not exist: {0}")]
    RelationMissing(String),

    /// upsert 실패 (재시도 없음)
    #[error("Store write failed: {0}")]
    StoreWriteFailed(String),

    /// 집계용 조회 실패 (뱃지 진행도 갱신 안 됨)
    #[error("Store read failed: {0}")]
    StoreReadFailed(String),
}

/// API 에러 타입
///
/// # Design Decision
///
/// 각 에러 variant는 적절한 HTTP 상태 코드에 매핑됨
/// - 클라이언트 에러: 4xx (잘못된 요청, 인증 실패 등)
/// - 서버 에러: 5xx (내부 오류)
///
/// 민감한 내부 정보는 클라이언트에 노출하지 않음
#[derive(Debug, Error)]
pub enum ApiError {
    // ============ 400 Bad Request ============
    #[error("Invalid request: {0}")]
    BadRequest(String),

    // ============ 401 Unauthorized ============
    #[error("Authentication required")]
    Unauthorized,

    // ============ 404 Not Found ============
    #[error("Resource not found: {0}")]
    NotFound(String),

    // ============ 500 Internal Server Error ============
    #[error("Progress store error: {0}")]
    Store(ProgressError),

    // ============ 503 Service Unavailable ============
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// API 에러 응답 구조
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            // 4xx 클라이언트 에러
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                msg.clone(),
                None,
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
                None,
            ),
            ApiError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{} not found", resource),
                None,
            ),

            // 5xx 서버 에러
            ApiError::Store(err) => {
                // 내부 에러는 클라이언트에 상세 정보 노출 안 함
                tracing::error!("Progress store error: {:?}", err);
                let code = match err {
                    ProgressError::RelationMissing(_) => "RELATION_MISSING",
                    ProgressError::StoreWriteFailed(_) => "STORE_WRITE_FAILED",
                    ProgressError::StoreReadFailed(_) => "STORE_READ_FAILED",
                    ProgressError::AuthenticationRequired => "UNAUTHORIZED",
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    code,
                    "Progress could not be saved or loaded".to_string(),
                    None,
                )
            }
            ApiError::ServiceUnavailable(service) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                format!("{} is currently unavailable", service),
                None,
            ),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// 도메인 에러를 ApiError로 변환
///
/// 인증 누락만 401, 나머지 store 에러는 500
impl From<ProgressError> for ApiError {
    fn from(err: ProgressError) -> Self {
        match err {
            ProgressError::AuthenticationRequired => ApiError::Unauthorized,
            other => ApiError::Store(other),
        }
    }
}

/// 경로 파라미터 파싱 실패 → 400
///
/// axum 기본 rejection은 plain text라 JSON 에러 포맷으로 맞춘다
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
