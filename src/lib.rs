//! Gym Badges API Library
//!
//! # Overview
//!
//! 뱃지/챌린지 기반 자기계발 앱의 백엔드 API.
//! 사용자는 8개 뱃지의 챌린지 5개를 순서대로 완료하고, 완료할 때마다 뱃지 진행률이 갱신된다.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                         API                              │
//! │                                                          │
//! │  ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐    │
//! │  │ Routes  │  │Services │  │   DB    │  │ Catalog │    │
//! │  └────┬────┘  └────┬────┘  └────┬────┘  └────┬────┘    │
//! │       │            │            │            │          │
//! │       └────────────┴────────────┴────────────┘          │
//! │                         │                                │
//! └─────────────────────────┼────────────────────────────────┘
//!                           │
//!              ┌────────────┴────────────┐
//!              ▼                         ▼
//!     ┌────────────────┐        ┌────────────────┐
//!     │ Progress Store │        │ Identity (Auth)│
//!     └────────────────┘        └────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: 환경 설정 관리
//! - `error`: 에러 타입 및 처리
//! - `catalog`: 고정 뱃지/챌린지 카탈로그
//! - `routes`: HTTP 엔드포인트 핸들러
//! - `services`: 비즈니스 로직 (진행도 집계, 잠금 규칙, 세션)
//! - `db`: 진행도 저장소
//! - `types`: 공통 타입 정의
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gym_badges_api::{config::Config, db::Database, AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let db = Database::connect(&config.database_url).await?;
//!     let state = AppState::new(Arc::new(db), config);
//!
//!     // ... 서버 시작
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod catalog;
pub mod routes;
pub mod services;
pub mod db;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use error::{ApiError, ProgressError};
pub use db::{Database, ProgressStore};
pub use services::{IdentityClient, ProfileService, ProgressAggregator, SessionVerifier};

/// 애플리케이션 전역 상태
///
/// 저장소는 시작 시 한 번 생성해 주입한다 (모듈 전역 클라이언트 없음)
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProgressStore>,
    pub progress: Arc<ProgressAggregator>,
    pub profiles: Arc<ProfileService>,
    pub sessions: Arc<SessionVerifier>,
    pub identity: Arc<IdentityClient>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProgressStore>, config: Config) -> Self {
        Self {
            progress: Arc::new(ProgressAggregator::new(store.clone())),
            profiles: Arc::new(ProfileService::new(store.clone())),
            sessions: Arc::new(SessionVerifier::new(&config.jwt_secret)),
            identity: Arc::new(IdentityClient::new(
                &config.supabase_url,
                &config.supabase_anon_key,
            )),
            store,
            config: Arc::new(config),
        }
    }
}
