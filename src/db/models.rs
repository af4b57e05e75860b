//! Database Models
//!
//! Rows of the three relations backing progress tracking:
//! `challenge_progress`, `badge_progress` and `profiles`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::types::{BadgeId, ChallengeId, UserId};

/// 챌린지 완료 기록
///
/// (user_id, badge_id, challenge_id) 조합이 유일키
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ChallengeCompletion {
    pub user_id: UserId,
    pub badge_id: BadgeId,
    pub challenge_id: ChallengeId,

    /// 완료 여부
    pub completed: bool,

    /// 완료 시각 (completed가 true가 되는 시점에 기록)
    pub completed_at: Option<DateTime<Utc>>,
}

/// 뱃지별 진행도 (집계 결과)
///
/// (user_id, badge_id) 조합이 유일키.
/// 챌린지 완료 시마다 전체 재계산됨
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct BadgeProgress {
    pub user_id: UserId,
    pub badge_id: BadgeId,

    /// 0 ~ 100
    pub progress_percentage: i32,

    /// progress_percentage == 100
    pub completed: bool,

    pub updated_at: DateTime<Utc>,
}

/// 사용자 프로필
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Profile {
    /// Identity provider의 user id
    pub id: UserId,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
