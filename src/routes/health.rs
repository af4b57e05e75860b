//! Health Check Endpoint
//!
//! 진행도 저장소에 실제로 닿는지까지 확인한다.
//! 저장소가 응답하지 않으면 200은 유지하되 `degraded`로 보고하고,
//! 챌린지 완료가 저장되지 않는 상태임을 운영 쪽에서 알 수 있게 한다.
//!
//! 인증 불필요. 세션 검증/identity provider 상태는 포함하지 않음.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// `GET /health` 응답
#[derive(Serialize)]
pub struct HealthReport {
    /// `healthy` | `degraded`
    pub status: &'static str,
    pub version: &'static str,
    pub progress_store: StoreProbe,
    pub checked_at: String,
}

/// 저장소 왕복 결과
#[derive(Serialize)]
pub struct StoreProbe {
    pub reachable: bool,
    pub round_trip_ms: Option<u64>,
    /// 실패 시 에러 분류 (`STORE_READ_FAILED` 등)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    let started = std::time::Instant::now();
    let probe = match state.store.health_check().await {
        Ok(()) => StoreProbe {
            reachable: true,
            round_trip_ms: Some(started.elapsed().as_millis() as u64),
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Progress store unreachable");
            StoreProbe {
                reachable: false,
                round_trip_ms: None,
                error: Some(e.to_string()),
            }
        }
    };

    Json(HealthReport {
        status: if probe.reachable { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        progress_store: probe,
        checked_at: chrono::Utc::now().to_rfc3339(),
    })
}
