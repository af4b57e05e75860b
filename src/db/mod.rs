//! Database Module
//!
//! # Interview Q&A
//!
//! Q: 진행도 저장에 PostgreSQL을 쓰는 이유는?
//! A: 필요한 계약이 정확히 두 가지
//!
//!    1. 유일키 기반 원자적 upsert (`INSERT ... ON CONFLICT DO UPDATE`)
//!    2. 사용자/뱃지 조건 조회
//!
//!    호스팅 BaaS도 내부적으로 Postgres를 쓰므로 같은 스키마를 그대로 사용 가능
//!
//! Q: 테이블이 없을 때는 어떻게 되는가?
//! A: Postgres는 `42P01 undefined_table`을 반환
//!    - 이 코드는 이 모듈에서만 해석하고 `ProgressError::RelationMissing`으로 변환
//!    - 상위 레이어(aggregator)는 `provision()` 후 1회만 재시도
//!
//! Q: 커넥션 풀은 어떻게 관리하는가?
//! A: SQLx의 PgPool 사용
//!    - 최소/최대 커넥션 수 설정
//!    - 커넥션 재사용 (오버헤드 감소)
//!    - 타임아웃 처리

mod models;
pub mod repository;

pub use models::*;
pub use repository::ProgressStore;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::error::ProgressError;
use crate::types::{BadgeId, ChallengeId, UserId};

/// Postgres `undefined_table` SQLSTATE
const UNDEFINED_TABLE: &str = "42P01";

/// 프로비저닝 DDL (migrations/와 동일한 스키마, 모두 멱등)
const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS challenge_progress (
        id BIGSERIAL PRIMARY KEY,
        user_id UUID NOT NULL,
        badge_id INTEGER NOT NULL,
        challenge_id INTEGER NOT NULL,
        completed BOOLEAN NOT NULL DEFAULT FALSE,
        completed_at TIMESTAMPTZ,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        UNIQUE (user_id, badge_id, challenge_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS badge_progress (
        id BIGSERIAL PRIMARY KEY,
        user_id UUID NOT NULL,
        badge_id INTEGER NOT NULL,
        progress_percentage INTEGER NOT NULL DEFAULT 0
            CHECK (progress_percentage BETWEEN 0 AND 100),
        completed BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        UNIQUE (user_id, badge_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS profiles (
        id UUID PRIMARY KEY,
        email TEXT,
        display_name TEXT,
        avatar_url TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

/// 데이터베이스 연결 및 쿼리 담당
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// 데이터베이스 연결
    ///
    /// # Connection Pool Settings
    ///
    /// - max_connections: 10
    /// - min_connections: 1
    /// - acquire_timeout: 3초
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .acquire_timeout(std::time::Duration::from_secs(3))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// 마이그레이션 실행
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ProgressStore for Database {
    async fn health_check(&self) -> Result<(), ProgressError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| read_error("health", e))?;
        Ok(())
    }

    async fn upsert_challenge_completion(
        &self,
        completion: &ChallengeCompletion,
    ) -> Result<(), ProgressError> {
        // 이미 완료된 기록이면 최초 완료 시각 유지 → 재호출은 같은 상태를 다시 쓰는 것
        sqlx::query(
            r#"
            INSERT INTO challenge_progress (
                user_id, badge_id, challenge_id, completed, completed_at
            )
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, badge_id, challenge_id)
            DO UPDATE SET
                completed = EXCLUDED.completed,
                completed_at = CASE
                    WHEN challenge_progress.completed THEN challenge_progress.completed_at
                    ELSE EXCLUDED.completed_at
                END
            "#
        )
        .bind(completion.user_id)
        .bind(completion.badge_id)
        .bind(completion.challenge_id)
        .bind(completion.completed)
        .bind(completion.completed_at)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error("challenge_progress", e))?;

        Ok(())
    }

    async fn select_completed_challenges(
        &self,
        user_id: UserId,
        badge_id: BadgeId,
    ) -> Result<Vec<ChallengeId>, ProgressError> {
        let ids = sqlx::query_scalar::<_, ChallengeId>(
            r#"
            SELECT challenge_id
            FROM challenge_progress
            WHERE user_id = $1 AND badge_id = $2 AND completed = TRUE
            ORDER BY challenge_id
            "#
        )
        .bind(user_id)
        .bind(badge_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error("challenge_progress", e))?;

        Ok(ids)
    }

    async fn upsert_badge_progress(
        &self,
        progress: &BadgeProgress,
    ) -> Result<BadgeProgress, ProgressError> {
        let row = sqlx::query_as::<_, BadgeProgress>(
            r#"
            INSERT INTO badge_progress (
                user_id, badge_id, progress_percentage, completed, updated_at
            )
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, badge_id)
            DO UPDATE SET
                progress_percentage = EXCLUDED.progress_percentage,
                completed = EXCLUDED.completed,
                updated_at = EXCLUDED.updated_at
            RETURNING user_id, badge_id, progress_percentage, completed, updated_at
            "#
        )
        .bind(progress.user_id)
        .bind(progress.badge_id)
        .bind(progress.progress_percentage)
        .bind(progress.completed)
        .bind(progress.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("badge_progress", e))?;

        Ok(row)
    }

    async fn select_badge_progress(
        &self,
        user_id: UserId,
    ) -> Result<Vec<BadgeProgress>, ProgressError> {
        let rows = sqlx::query_as::<_, BadgeProgress>(
            r#"
            SELECT user_id, badge_id, progress_percentage, completed, updated_at
            FROM badge_progress
            WHERE user_id = $1
            ORDER BY badge_id
            "#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error("badge_progress", e))?;

        Ok(rows)
    }

    async fn find_profile(&self, user_id: UserId) -> Result<Option<Profile>, ProgressError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, email, display_name, avatar_url, created_at
            FROM profiles
            WHERE id = $1
            "#
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error("profiles", e))?;

        Ok(profile)
    }

    async fn insert_profile(&self, profile: &Profile) -> Result<Profile, ProgressError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, email, display_name, avatar_url, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO NOTHING
            "#
        )
        .bind(profile.id)
        .bind(&profile.email)
        .bind(&profile.display_name)
        .bind(&profile.avatar_url)
        .bind(profile.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error("profiles", e))?;

        // 동시 생성 시 먼저 들어간 행이 기준
        self.find_profile(profile.id)
            .await?
            .ok_or_else(|| ProgressError::StoreReadFailed("profile vanished after insert".to_string()))
    }

    async fn provision(&self) -> Result<(), ProgressError> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| ProgressError::StoreWriteFailed(format!("provisioning failed: {}", e)))?;
        }
        tracing::info!("Progress relations provisioned");
        Ok(())
    }
}

// ============ Error Translation ============

fn is_undefined_table(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNDEFINED_TABLE),
        _ => false,
    }
}

fn write_error(relation: &str, err: sqlx::Error) -> ProgressError {
    if is_undefined_table(&err) {
        ProgressError::RelationMissing(relation.to_string())
    } else {
        ProgressError::StoreWriteFailed(err.to_string())
    }
}

fn read_error(relation: &str, err: sqlx::Error) -> ProgressError {
    if is_undefined_table(&err) {
        ProgressError::RelationMissing(relation.to_string())
    } else {
        ProgressError::StoreReadFailed(err.to_string())
    }
}
