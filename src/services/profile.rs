//! Profile Service
//!
//! 첫 로그인 시 프로필 생성, 헤더 표시용 이름/이니셜 계산.

use std::sync::Arc;

use chrono::Utc;

use crate::db::{Profile, ProgressStore};
use crate::error::ProgressError;
use crate::services::Session;

/// 이름을 알 수 없을 때 표시명
const FALLBACK_NAME: &str = "Trainer";

pub struct ProfileService {
    store: Arc<dyn ProgressStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        Self { store }
    }

    /// 프로필 조회, 없으면 세션 정보로 생성
    pub async fn ensure_profile(&self, session: &Session) -> Result<Profile, ProgressError> {
        if let Some(profile) = self.store.find_profile(session.user_id).await? {
            return Ok(profile);
        }

        tracing::info!(user_id = %session.user_id, "Creating profile on first sign-in");
        let profile = Profile {
            id: session.user_id,
            email: session.email.clone(),
            display_name: session.email.as_deref().and_then(email_local_part).map(str::to_string),
            avatar_url: None,
            created_at: Utc::now(),
        };
        self.store.insert_profile(&profile).await
    }
}

/// 표시명: display_name → 이메일 아이디 → "Trainer"
pub fn display_name(profile: &Profile) -> String {
    profile
        .display_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .or_else(|| profile.email.as_deref().and_then(email_local_part))
        .unwrap_or(FALLBACK_NAME)
        .to_string()
}

/// 이니셜: 단어 첫 글자 최대 2개, 대문자. 이름이 없으면 "U"
pub fn initials(name: Option<&str>) -> String {
    let letters: String = name
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();

    if letters.is_empty() {
        "U".to_string()
    } else {
        letters
    }
}

fn email_local_part(email: &str) -> Option<&str> {
    email.split('@').next().filter(|local| !local.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::mock::MockProgressStore;
    use uuid::Uuid;

    fn session(email: Option<&str>) -> Session {
        Session {
            user_id: Uuid::new_v4(),
            email: email.map(str::to_string),
            access_token: "token".to_string(),
            expires_at: Utc::now(),
        }
    }

    fn profile(display_name: Option<&str>, email: Option<&str>) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            email: email.map(str::to_string),
            display_name: display_name.map(str::to_string),
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_profile_created_once() {
        let store = Arc::new(MockProgressStore::new());
        let service = ProfileService::new(store);
        let session = session(Some("misty@cerulean.gym"));

        let created = service.ensure_profile(&session).await.unwrap();
        assert_eq!(created.id, session.user_id);
        assert_eq!(created.display_name.as_deref(), Some("misty"));

        let again = service.ensure_profile(&session).await.unwrap();
        assert_eq!(again, created);
    }

    #[test]
    fn test_display_name_fallbacks() {
        assert_eq!(display_name(&profile(Some("Ash Ketchum"), Some("ash@x.io"))), "Ash Ketchum");
        assert_eq!(display_name(&profile(Some("  "), Some("brock@x.io"))), "brock");
        assert_eq!(display_name(&profile(None, None)), "Trainer");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials(Some("ash ketchum")), "AK");
        assert_eq!(initials(Some("Professor Samuel Oak")), "PS");
        assert_eq!(initials(Some("misty")), "M");
        assert_eq!(initials(None), "U");
        assert_eq!(initials(Some("")), "U");
    }
}
