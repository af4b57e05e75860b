//! Unlock Rule
//!
//! 챌린지 잠금 여부 계산 (순수 함수).
//!
//! 규칙: 1번째 챌린지는 항상 열림, i번째(i > 1)는 i-1번째가 완료되지 않았으면 잠김.
//! 챌린지 종류와 무관한 선형 게이트이며, 완료 기록이 순서를 건너뛰었더라도
//! 바로 앞 챌린지 기준으로만 판단한다.

use std::collections::HashSet;

use crate::types::ChallengeId;

/// 순서대로 정렬된 챌린지 목록과 완료 집합으로 각 위치의 잠금 여부 계산
///
/// 결과 길이는 `ordered`와 같고, 빈 목록이면 빈 결과.
pub fn evaluate_locks(ordered: &[ChallengeId], completed: &HashSet<ChallengeId>) -> Vec<bool> {
    ordered
        .iter()
        .enumerate()
        .map(|(idx, _)| idx > 0 && !completed.contains(&ordered[idx - 1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BADGE_ONE: [ChallengeId; 5] = [1, 2, 3, 4, 5];

    fn set(ids: &[ChallengeId]) -> HashSet<ChallengeId> {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_nothing_completed() {
        let locks = evaluate_locks(&BADGE_ONE, &set(&[]));
        assert_eq!(locks, vec![false, true, true, true, true]);
    }

    #[test]
    fn test_first_completed_unlocks_second() {
        let locks = evaluate_locks(&BADGE_ONE, &set(&[1]));
        assert_eq!(locks, vec![false, false, true, true, true]);
    }

    #[test]
    fn test_out_of_order_completion_does_not_unlock() {
        // 3번만 완료: 3번 자신은 2번이 미완료라 여전히 잠김, 4번은 열림
        let locks = evaluate_locks(&BADGE_ONE, &set(&[3]));
        assert_eq!(locks, vec![false, true, true, false, true]);
    }

    #[test]
    fn test_all_completion_subsets() {
        // 5개 챌린지의 모든 완료 조합(32가지)에 대해 규칙 확인
        for mask in 0u32..32 {
            let completed: HashSet<ChallengeId> = BADGE_ONE
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, id)| *id)
                .collect();

            let locks = evaluate_locks(&BADGE_ONE, &completed);
            assert_eq!(locks.len(), 5);
            assert!(!locks[0], "position 1 must never be locked (mask {:05b})", mask);
            for i in 1..5 {
                assert_eq!(locks[i], !completed.contains(&BADGE_ONE[i - 1]), "mask {:05b}", mask);
            }
        }
    }

    #[test]
    fn test_shorter_lists() {
        assert!(evaluate_locks(&[], &set(&[1])).is_empty());
        assert_eq!(evaluate_locks(&[7], &set(&[])), vec![false]);
        assert_eq!(evaluate_locks(&[7, 9], &set(&[7])), vec![false, false]);
        assert_eq!(evaluate_locks(&[7, 9, 11], &set(&[9])), vec![false, true, false]);
    }

    #[test]
    fn test_ids_from_other_badges_are_ignored() {
        let locks = evaluate_locks(&[6, 7, 8, 9, 10], &set(&[1, 2, 3, 4, 5]));
        assert_eq!(locks, vec![false, true, true, true, true]);
    }
}
