//! API Routes Module
//!
//! 모든 HTTP 엔드포인트 정의
//!
//! # Routes
//! - `/health` - 헬스 체크
//! - `/badges/*` - 뱃지 맵, 뱃지 상세, 챌린지 완료
//! - `/progress` - 뱃지 진행도 목록
//! - `/profile` - 사용자 프로필
//! - `/auth/signout` - 로그아웃

pub mod auth;
pub mod badges;
pub mod health;
pub mod params;
pub mod profile;
pub mod progress;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// 라우터 생성 (미들웨어 제외)
///
/// # Route Structure
///
/// ```text
/// GET  /health                                            - 서버 상태 확인
///
/// GET  /badges                                            - 뱃지 맵
/// GET  /badges/:badge_id                                  - 뱃지 상세 + 잠금 상태
/// POST /badges/:badge_id/challenges/:challenge_id/complete - 챌린지 완료
///
/// GET  /progress                                          - 뱃지 진행도 목록
/// GET  /profile                                           - 프로필 (없으면 생성)
/// POST /auth/signout                                      - 로그아웃
/// ```
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))

        // Badges
        .route("/badges", get(badges::get_badge_map))
        .route("/badges/:badge_id", get(badges::get_badge_detail))
        .route(
            "/badges/:badge_id/challenges/:challenge_id/complete",
            post(badges::mark_challenge_complete),
        )

        // Progress
        .route("/progress", get(progress::get_progress))

        // Profile / Auth
        .route("/profile", get(profile::get_profile))
        .route("/auth/signout", post(auth::sign_out))

        // 상태 주입
        .with_state(state)
}
