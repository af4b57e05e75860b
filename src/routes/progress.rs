//! Progress Endpoint

use axum::{extract::State, Json};

use crate::{
    error::ApiError,
    routes::{auth::CurrentSession, badges::BadgeProgressResponse},
    AppState,
};

/// GET /progress
///
/// 저장된 뱃지 진행도 행 목록 (기록이 있는 뱃지만)
pub async fn get_progress(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<Vec<BadgeProgressResponse>>, ApiError> {
    let rows = state.progress.get_badge_progress(session.user_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
