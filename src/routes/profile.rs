//! Profile Endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{
    error::ApiError,
    routes::auth::CurrentSession,
    services::{display_name, initials},
    types::UserId,
    AppState,
};

/// 프로필 응답 (헤더 표시용 필드 포함)
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: UserId,
    pub email: Option<String>,
    pub display_name: String,
    pub initials: String,
    pub avatar_url: Option<String>,
    pub created_at: String,
}

/// GET /profile
///
/// 첫 호출 시 프로필 생성
pub async fn get_profile(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = state.profiles.ensure_profile(&session).await?;
    let name = display_name(&profile);

    Ok(Json(ProfileResponse {
        id: profile.id,
        email: profile.email,
        initials: initials(Some(name.as_str())),
        display_name: name,
        avatar_url: profile.avatar_url,
        created_at: profile.created_at.to_rfc3339(),
    }))
}
