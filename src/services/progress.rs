//! Progress Aggregator
//!
//! # Interview Q&A
//!
//! Q: 뱃지 진행률은 어떻게 계산하는가?
//! A: 완료 시마다 전체 재계산 (증분 아님)
//!
//!    1. challenge_progress upsert (user, badge, challenge)
//!    2. (user, badge)의 완료 기록 다시 조회 → 개수
//!    3. round(100 * count / 5)
//!    4. badge_progress upsert (user, badge)
//!
//! Q: 같은 사용자가 동시에 두 챌린지를 완료하면?
//! A: 2단계(조회)와 4단계(쓰기) 사이에 경쟁 가능
//!    - 두 호출 모두 전체 완료 집합에서 재계산하므로 나중 호출이 최신 상태를 반영
//!    - 완료 기록은 삭제되지 않으므로 진행률은 단조 증가
//!    - 별도 락 없이 수렴
//!
//! Q: 잠긴 챌린지를 완료 처리하면?
//! A: 거부하지 않음. 잠금 판단은 조회 시 `evaluate_locks`가 별도로 수행

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;

use crate::catalog::{self, CHALLENGES_PER_BADGE};
use crate::db::{BadgeProgress, ChallengeCompletion, ProgressStore};
use crate::error::ProgressError;
use crate::types::{BadgeId, ChallengeId, UserId};

/// 완료 개수 → 진행률 (0~100, 반올림)
pub fn progress_percentage(completed: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    // 정수 반올림: round(100 * c / t) == (200c + t) / 2t
    ((200 * completed + total) / (2 * total)) as i32
}

/// 진행도 집계 서비스
pub struct ProgressAggregator {
    store: Arc<dyn ProgressStore>,
}

impl ProgressAggregator {
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        Self { store }
    }

    /// 챌린지 완료 처리 후 갱신된 뱃지 진행도 반환
    ///
    /// # Failure Policy
    ///
    /// - `RelationMissing`: 테이블 생성 후 전체 단계를 정확히 1회 재시도
    /// - 그 외 에러: 재시도 없이 반환 (호출자는 미반영으로 간주)
    pub async fn mark_complete(
        &self,
        user_id: UserId,
        badge_id: BadgeId,
        challenge_id: ChallengeId,
    ) -> Result<BadgeProgress, ProgressError> {
        let result = match self.apply_completion(user_id, badge_id, challenge_id).await {
            Err(ProgressError::RelationMissing(relation)) => {
                tracing::warn!(
                    "Relation {} missing, provisioning and retrying once",
                    relation
                );
                self.store.provision().await?;
                self.apply_completion(user_id, badge_id, challenge_id).await
            }
            other => other,
        };

        match &result {
            Ok(progress) => tracing::info!(
                %user_id,
                badge_id,
                challenge_id,
                progress = progress.progress_percentage,
                "Challenge marked complete"
            ),
            Err(e) => tracing::error!(
                %user_id,
                badge_id,
                challenge_id,
                "Failed to mark challenge complete: {}",
                e
            ),
        }

        result
    }

    async fn apply_completion(
        &self,
        user_id: UserId,
        badge_id: BadgeId,
        challenge_id: ChallengeId,
    ) -> Result<BadgeProgress, ProgressError> {
        let now = Utc::now();

        self.store
            .upsert_challenge_completion(&ChallengeCompletion {
                user_id,
                badge_id,
                challenge_id,
                completed: true,
                completed_at: Some(now),
            })
            .await?;

        let completed = self
            .store
            .select_completed_challenges(user_id, badge_id)
            .await?;

        let total = catalog::badge(badge_id)
            .map(|b| b.total_challenges())
            .unwrap_or(CHALLENGES_PER_BADGE);
        let percentage = progress_percentage(completed.len(), total);

        self.store
            .upsert_badge_progress(&BadgeProgress {
                user_id,
                badge_id,
                progress_percentage: percentage,
                completed: percentage == 100,
                updated_at: now,
            })
            .await
    }

    /// 사용자의 뱃지 진행도 목록
    ///
    /// 테이블이 아직 없으면 진행 기록이 없는 것으로 간주
    pub async fn get_badge_progress(
        &self,
        user_id: UserId,
    ) -> Result<Vec<BadgeProgress>, ProgressError> {
        match self.store.select_badge_progress(user_id).await {
            Err(ProgressError::RelationMissing(relation)) => {
                tracing::debug!("Relation {} missing, no badge progress yet", relation);
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// (user, badge)의 완료된 챌린지 ID 집합
    pub async fn get_challenge_completions(
        &self,
        user_id: UserId,
        badge_id: BadgeId,
    ) -> Result<HashSet<ChallengeId>, ProgressError> {
        match self.store.select_completed_challenges(user_id, badge_id).await {
            Ok(ids) => Ok(ids.into_iter().collect()),
            Err(ProgressError::RelationMissing(relation)) => {
                tracing::debug!("Relation {} missing, no completions yet", relation);
                Ok(HashSet::new())
            }
            Err(e) => Err(e),
        }
    }
}
