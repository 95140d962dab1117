//! SparseGoalReward - goal-only reward
//!
//! - own goal scored: +1
//! - opponent scored: -1
//! - otherwise: 0
//!
//! The environment reports reward from player one's perspective, so player
//! two scoring yields -1.

use crate::engine::types::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SparseGoalReward {
    perspective: PlayerId,
}

impl SparseGoalReward {
    pub fn new(perspective: PlayerId) -> Self {
        Self { perspective }
    }

    /// Reward as reported by the environment
    pub fn player_one() -> Self {
        Self::new(PlayerId::One)
    }

    pub fn compute(&self, scorer: Option<PlayerId>) -> i32 {
        match scorer {
            Some(p) if p == self.perspective => 1,
            Some(_) => -1,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_one_perspective() {
        let reward = SparseGoalReward::player_one();
        assert_eq!(reward.compute(Some(PlayerId::One)), 1);
        assert_eq!(reward.compute(Some(PlayerId::Two)), -1);
        assert_eq!(reward.compute(None), 0);
    }

    #[test]
    fn test_player_two_perspective() {
        let reward = SparseGoalReward::new(PlayerId::Two);
        assert_eq!(reward.compute(Some(PlayerId::Two)), 1);
        assert_eq!(reward.compute(Some(PlayerId::One)), -1);
    }
}
