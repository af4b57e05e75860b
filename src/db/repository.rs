//! Repository Pattern Implementation
//!
//! # Interview Q&A
//!
//! Q: Repository 패턴이란?
//! A: 데이터 접근 로직을 추상화하는 패턴
//!
//!    장점:
//!    - 비즈니스 로직과 데이터 접근 분리
//!    - 테스트 시 Mock 구현 쉬움
//!    - 백엔드 교체 시 영향 최소화
//!
//! Q: 이 trait이 구현체에 요구하는 계약은?
//! A: 두 가지 연산만 필요
//!
//!    - upsert(relation, row, conflict key): 선언된 유일키 기준의 원자적 insert-or-update
//!    - select(relation, filter)
//!
//!    테이블이 없으면 반드시 `ProgressError::RelationMissing`을 반환해야 함
//!    (호출자가 `provision()` 후 1회 재시도)

use async_trait::async_trait;

use super::models::{BadgeProgress, ChallengeCompletion, Profile};
use crate::error::ProgressError;
use crate::types::{BadgeId, ChallengeId, UserId};

/// 진행도 저장소 인터페이스
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// 연결 상태 확인
    async fn health_check(&self) -> Result<(), ProgressError>;

    /// 챌린지 완료 기록 upsert
    ///
    /// 충돌 키: (user_id, badge_id, challenge_id).
    /// 이미 완료된 기록이면 최초 completed_at을 유지한다.
    async fn upsert_challenge_completion(
        &self,
        completion: &ChallengeCompletion,
    ) -> Result<(), ProgressError>;

    /// (user, badge)의 완료된 챌린지 ID 조회
    async fn select_completed_challenges(
        &self,
        user_id: UserId,
        badge_id: BadgeId,
    ) -> Result<Vec<ChallengeId>, ProgressError>;

    /// 뱃지 진행도 upsert 후 저장된 행 반환
    ///
    /// 충돌 키: (user_id, badge_id)
    async fn upsert_badge_progress(
        &self,
        progress: &BadgeProgress,
    ) -> Result<BadgeProgress, ProgressError>;

    /// 사용자의 모든 뱃지 진행도 조회
    async fn select_badge_progress(
        &self,
        user_id: UserId,
    ) -> Result<Vec<BadgeProgress>, ProgressError>;

    /// 프로필 조회
    async fn find_profile(&self, user_id: UserId) -> Result<Option<Profile>, ProgressError>;

    /// 프로필 생성 (이미 있으면 기존 행 반환)
    async fn insert_profile(&self, profile: &Profile) -> Result<Profile, ProgressError>;

    /// 테이블 생성 (멱등)
    async fn provision(&self) -> Result<(), ProgressError>;
}

// PostgreSQL 구현은 db/mod.rs의 Database 구조체에 있음
// 테스트용 Mock 구현:

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::RwLock;

    #[derive(Default)]
    struct Tables {
        completions: HashMap<(UserId, BadgeId, ChallengeId), ChallengeCompletion>,
        badges: HashMap<(UserId, BadgeId), BadgeProgress>,
        profiles: HashMap<UserId, Profile>,
    }

    /// 메모리 기반 저장소
    ///
    /// 장애 주입 플래그로 에러 경로를 재현할 수 있음
    pub struct MockProgressStore {
        tables: RwLock<Tables>,
        provisioned: AtomicBool,
        /// true면 provision() 후에도 테이블이 생기지 않음
        provision_ineffective: AtomicBool,
        provision_calls: AtomicUsize,
        fail_writes: AtomicBool,
        fail_reads: AtomicBool,
        challenge_writes: AtomicUsize,
        badge_writes: AtomicUsize,
    }

    impl MockProgressStore {
        pub fn new() -> Self {
            Self {
                tables: RwLock::new(Tables::default()),
                provisioned: AtomicBool::new(true),
                provision_ineffective: AtomicBool::new(false),
                provision_calls: AtomicUsize::new(0),
                fail_writes: AtomicBool::new(false),
                fail_reads: AtomicBool::new(false),
                challenge_writes: AtomicUsize::new(0),
                badge_writes: AtomicUsize::new(0),
            }
        }

        /// 테이블이 아직 없는 상태
        pub fn unprovisioned() -> Self {
            let store = Self::new();
            store.provisioned.store(false, Ordering::SeqCst);
            store
        }

        pub fn set_provision_ineffective(&self, value: bool) {
            self.provision_ineffective.store(value, Ordering::SeqCst);
        }

        pub fn set_fail_writes(&self, value: bool) {
            self.fail_writes.store(value, Ordering::SeqCst);
        }

        pub fn set_fail_reads(&self, value: bool) {
            self.fail_reads.store(value, Ordering::SeqCst);
        }

        pub fn provision_calls(&self) -> usize {
            self.provision_calls.load(Ordering::SeqCst)
        }

        pub fn challenge_writes(&self) -> usize {
            self.challenge_writes.load(Ordering::SeqCst)
        }

        pub fn badge_writes(&self) -> usize {
            self.badge_writes.load(Ordering::SeqCst)
        }

        pub fn completion(
            &self,
            user_id: UserId,
            badge_id: BadgeId,
            challenge_id: ChallengeId,
        ) -> Option<ChallengeCompletion> {
            let tables = self.tables.read().unwrap();
            tables.completions.get(&(user_id, badge_id, challenge_id)).cloned()
        }

        pub fn badge_row(&self, user_id: UserId, badge_id: BadgeId) -> Option<BadgeProgress> {
            let tables = self.tables.read().unwrap();
            tables.badges.get(&(user_id, badge_id)).cloned()
        }

        fn ensure_relation(&self, relation: &str) -> Result<(), ProgressError> {
            if self.provisioned.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(ProgressError::RelationMissing(relation.to_string()))
            }
        }

        fn check_write(&self, relation: &str) -> Result<(), ProgressError> {
            self.ensure_relation(relation)?;
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(ProgressError::StoreWriteFailed(format!("{} rejected", relation)));
            }
            Ok(())
        }

        fn check_read(&self, relation: &str) -> Result<(), ProgressError> {
            self.ensure_relation(relation)?;
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(ProgressError::StoreReadFailed(format!("{} unavailable", relation)));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ProgressStore for MockProgressStore {
        async fn health_check(&self) -> Result<(), ProgressError> {
            self.check_read("health")
        }

        async fn upsert_challenge_completion(
            &self,
            completion: &ChallengeCompletion,
        ) -> Result<(), ProgressError> {
            self.check_write("challenge_progress")?;
            let key = (completion.user_id, completion.badge_id, completion.challenge_id);
            let mut tables = self.tables.write().unwrap();
            let completed_at = match tables.completions.get(&key) {
                Some(existing) if existing.completed => existing.completed_at,
                _ => completion.completed_at,
            };
            tables.completions.insert(
                key,
                ChallengeCompletion {
                    completed_at,
                    ..completion.clone()
                },
            );
            self.challenge_writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn select_completed_challenges(
            &self,
            user_id: UserId,
            badge_id: BadgeId,
        ) -> Result<Vec<ChallengeId>, ProgressError> {
            self.check_read("challenge_progress")?;
            let tables = self.tables.read().unwrap();
            let mut ids: Vec<ChallengeId> = tables
                .completions
                .values()
                .filter(|c| c.user_id == user_id && c.badge_id == badge_id && c.completed)
                .map(|c| c.challenge_id)
                .collect();
            ids.sort_unstable();
            Ok(ids)
        }

        async fn upsert_badge_progress(
            &self,
            progress: &BadgeProgress,
        ) -> Result<BadgeProgress, ProgressError> {
            self.check_write("badge_progress")?;
            let mut tables = self.tables.write().unwrap();
            tables
                .badges
                .insert((progress.user_id, progress.badge_id), progress.clone());
            self.badge_writes.fetch_add(1, Ordering::SeqCst);
            Ok(progress.clone())
        }

        async fn select_badge_progress(
            &self,
            user_id: UserId,
        ) -> Result<Vec<BadgeProgress>, ProgressError> {
            self.check_read("badge_progress")?;
            let tables = self.tables.read().unwrap();
            let mut rows: Vec<BadgeProgress> = tables
                .badges
                .values()
                .filter(|b| b.user_id == user_id)
                .cloned()
                .collect();
            rows.sort_by_key(|b| b.badge_id);
            Ok(rows)
        }

        async fn find_profile(&self, user_id: UserId) -> Result<Option<Profile>, ProgressError> {
            self.check_read("profiles")?;
            let tables = self.tables.read().unwrap();
            Ok(tables.profiles.get(&user_id).cloned())
        }

        async fn insert_profile(&self, profile: &Profile) -> Result<Profile, ProgressError> {
            self.check_write("profiles")?;
            let mut tables = self.tables.write().unwrap();
            let stored = tables
                .profiles
                .entry(profile.id)
                .or_insert_with(|| profile.clone());
            Ok(stored.clone())
        }

        async fn provision(&self) -> Result<(), ProgressError> {
            self.provision_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(ProgressError::StoreWriteFailed("CREATE TABLE rejected".to_string()));
            }
            if !self.provision_ineffective.load(Ordering::SeqCst) {
                self.provisioned.store(true, Ordering::SeqCst);
            }
            Ok(())
        }
    }
}
