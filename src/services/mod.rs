//! Services Module
//!
//! 비즈니스 로직을 담당하는 서비스 레이어
//!
//! # Services
//! - `ProgressAggregator`: 챌린지 완료 + 뱃지 진행률 재계산
//! - `evaluate_locks`: 챌린지 잠금 규칙
//! - `SessionVerifier`: 세션 토큰 검증
//! - `IdentityClient`: Identity provider 연동 (sign out)
//! - `ProfileService`: 사용자 프로필

mod progress;
mod unlock;
mod session;
mod identity;
mod profile;

pub use progress::{ProgressAggregator, progress_percentage};
pub use unlock::evaluate_locks;
pub use session::{SessionVerifier, Session, Claims, bearer_token, AUTHENTICATED_AUDIENCE};
pub use identity::IdentityClient;
pub use profile::{ProfileService, display_name, initials};

#[cfg(test)]
pub(crate) use session::tests::{token_for, SECRET as TEST_JWT_SECRET};
