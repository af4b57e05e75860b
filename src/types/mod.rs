//! Common Types Module
//!
//! 애플리케이션 전반에서 사용되는 공통 타입 정의

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 뱃지 ID (카탈로그 기준 1~8)
pub type BadgeId = i32;

/// 챌린지 ID (카탈로그 전체에서 유일, 1~40)
pub type ChallengeId = i32;

/// 사용자 ID (Identity provider의 `sub` claim)
pub type UserId = Uuid;

/// 챌린지 종류
///
/// 카탈로그의 모든 뱃지는 study → reflect → roleplay → apply → boss 순서를 따름
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeType {
    Study,
    Reflect,
    Roleplay,
    Apply,
    Boss,
}

impl ChallengeType {
    /// 화면 표시용 라벨
    pub fn label(&self) -> &'static str {
        match self {
            ChallengeType::Study => "Study",
            ChallengeType::Reflect => "Reflect",
            ChallengeType::Roleplay => "Practice",
            ChallengeType::Apply => "Apply",
            ChallengeType::Boss => "Gym Leader",
        }
    }
}

impl std::fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ChallengeType::Study => "study",
            ChallengeType::Reflect => "reflect",
            ChallengeType::Roleplay => "roleplay",
            ChallengeType::Apply => "apply",
            ChallengeType::Boss => "boss",
        };
        write!(f, "{}", s)
    }
}

/// 진행률 → 레벨 (20%당 1레벨, 올림)
///
/// 0% → 0, 1~20% → 1, ..., 81~100% → 5
pub fn level_for(progress_percentage: i32) -> i32 {
    let clamped = progress_percentage.clamp(0, 100);
    (clamped + 19) / 20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_type_serde() {
        let json = serde_json::to_string(&ChallengeType::Roleplay).unwrap();
        assert_eq!(json, "\"roleplay\"");

        let parsed: ChallengeType = serde_json::from_str("\"boss\"").unwrap();
        assert_eq!(parsed, ChallengeType::Boss);
    }

    #[test]
    fn test_challenge_type_label() {
        assert_eq!(ChallengeType::Roleplay.label(), "Practice");
        assert_eq!(ChallengeType::Boss.label(), "Gym Leader");
        assert_eq!(ChallengeType::Apply.to_string(), "apply");
    }

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), 0);
        assert_eq!(level_for(20), 1);
        assert_eq!(level_for(21), 2);
        assert_eq!(level_for(60), 3);
        assert_eq!(level_for(100), 5);
        // 범위 밖 값은 잘라냄
        assert_eq!(level_for(150), 5);
        assert_eq!(level_for(-10), 0);
    }
}
