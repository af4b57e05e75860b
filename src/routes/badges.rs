//! Badge Endpoints
//!
//! Badge map, badge detail with per-challenge lock state, and challenge completion.
//! Lock state is always re-derived from completion records on read; completion itself
//! does not check it.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{
    catalog::{self, Badge},
    db::BadgeProgress,
    error::ApiError,
    routes::{auth::CurrentSession, params::ApiPath},
    services::evaluate_locks,
    types::{level_for, BadgeId, ChallengeId, ChallengeType},
    AppState,
};

// ============ Request/Response Types ============

/// 뱃지 맵 항목
#[derive(Debug, Serialize)]
pub struct BadgeSummary {
    pub id: BadgeId,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub progress_percentage: i32,
    /// 뱃지 획득 여부 (진행률 100%)
    pub earned: bool,
    /// 20%당 1레벨
    pub level: i32,
}

/// 뱃지 상세
#[derive(Debug, Serialize)]
pub struct BadgeDetail {
    pub id: BadgeId,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub progress_percentage: i32,
    pub earned: bool,
    pub challenges: Vec<ChallengeView>,
}

#[derive(Debug, Serialize)]
pub struct ChallengeView {
    pub id: ChallengeId,
    /// 1부터 시작하는 순서
    pub step: usize,
    #[serde(rename = "type")]
    pub kind: ChallengeType,
    pub type_label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_path: Option<&'static str>,
    pub completed: bool,
    pub locked: bool,
}

/// 뱃지 진행도 응답
#[derive(Debug, Serialize)]
pub struct BadgeProgressResponse {
    pub badge_id: BadgeId,
    pub progress_percentage: i32,
    pub completed: bool,
    pub level: i32,
    pub updated_at: String,
}

impl From<BadgeProgress> for BadgeProgressResponse {
    fn from(p: BadgeProgress) -> Self {
        Self {
            badge_id: p.badge_id,
            progress_percentage: p.progress_percentage,
            completed: p.completed,
            level: level_for(p.progress_percentage),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

// ============ Handlers ============

/// GET /badges
///
/// 전체 뱃지 + 사용자 진행률 (기록 없으면 0%)
pub async fn get_badge_map(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Vec<BadgeSummary>>, ApiError> {
    let rows = state.progress.get_badge_progress(session.user_id).await?;

    let badges = catalog::all()
        .iter()
        .map(|badge| {
            let row = rows.iter().find(|r| r.badge_id == badge.id);
            let progress = row.map(|r| r.progress_percentage).unwrap_or(0);
            BadgeSummary {
                id: badge.id,
                name: badge.name,
                icon: badge.icon,
                description: badge.description,
                progress_percentage: progress,
                earned: row.map(|r| r.completed).unwrap_or(false),
                level: level_for(progress),
            }
        })
        .collect();

    Ok(Json(badges))
}

/// GET /badges/:badge_id
///
/// 뱃지 상세 + 챌린지별 완료/잠금 상태
pub async fn get_badge_detail(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ApiPath(badge_id): ApiPath<BadgeId>,
) -> Result<Json<BadgeDetail>, ApiError> {
    let badge = find_badge(badge_id)?;

    let completed = state
        .progress
        .get_challenge_completions(session.user_id, badge_id)
        .await?;
    let rows = state.progress.get_badge_progress(session.user_id).await?;
    let row = rows.iter().find(|r| r.badge_id == badge_id);

    let locks = evaluate_locks(&badge.ordered_ids(), &completed);
    let challenges = badge
        .challenges
        .iter()
        .zip(locks)
        .filter_map(|(challenge, locked)| {
            let step = badge.position(challenge.id)?;
            Some(ChallengeView {
                id: challenge.id,
                step,
                kind: challenge.kind,
                type_label: challenge.kind.label(),
                title: challenge.title,
                description: challenge.description,
                trainer_path: challenge.trainer_path,
                completed: completed.contains(&challenge.id),
                locked,
            })
        })
        .collect();

    Ok(Json(BadgeDetail {
        id: badge.id,
        name: badge.name,
        icon: badge.icon,
        description: badge.description,
        progress_percentage: row.map(|r| r.progress_percentage).unwrap_or(0),
        earned: row.map(|r| r.completed).unwrap_or(false),
        challenges,
    }))
}

/// POST /badges/:badge_id/challenges/:challenge_id/complete
///
/// 챌린지 완료 처리
///
/// # Flow
///
/// 1. 카탈로그에서 뱃지/챌린지 소속 확인 (404)
/// 2. 완료 기록 upsert → 진행률 재계산 → 뱃지 진행도 upsert
/// 3. 갱신된 진행도 반환
///
/// 잠금 상태는 확인하지 않음 (조회 시 별도로 계산)
pub async fn mark_challenge_complete(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    ApiPath((badge_id, challenge_id)): ApiPath<(BadgeId, ChallengeId)>,
) -> Result<Json<BadgeProgressResponse>, ApiError> {
    let badge = find_badge(badge_id)?;
    if badge.challenge(challenge_id).is_none() {
        return Err(ApiError::NotFound(format!(
            "Challenge {} in badge {}",
            challenge_id, badge_id
        )));
    }

    let progress = state
        .progress
        .mark_complete(session.user_id, badge_id, challenge_id)
        .await?;

    Ok(Json(progress.into()))
}

// ============ Helpers ============

fn find_badge(badge_id: BadgeId) -> Result<&'static Badge, ApiError> {
    catalog::badge(badge_id).ok_or_else(|| ApiError::NotFound(format!("Badge {}", badge_id)))
}
