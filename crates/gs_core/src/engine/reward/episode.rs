//! EpisodeMetrics - per-episode counters
//!
//! Observational only: nothing here feeds back into transitions.
//!
//! ```rust,ignore
//! let mut metrics = EpisodeMetrics::new();
//! metrics.record_step(reward, possession);
//! metrics.set_termination(TerminationReason::GoalScored);
//! ```

use serde::{Deserialize, Serialize};

use crate::engine::movement::MoveOutcome;
use crate::engine::types::PlayerId;

// ============================================================================
// TerminationReason
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Episode still running
    #[default]
    InProgress,
    /// Ball carried into a goal mouth (`terminated`)
    GoalScored,
    /// Step limit reached (`truncated`)
    StepLimit,
}

impl TerminationReason {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminationReason::InProgress)
    }
}

// ============================================================================
// EpisodeMetrics
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeMetrics {
    /// Steps taken
    pub total_steps: u32,

    /// Sum of player-one rewards
    pub cumulative_reward: i32,

    /// Scorer, if the episode ended with a goal
    pub scorer: Option<PlayerId>,

    pub termination_reason: TerminationReason,

    /// Steps ending with each player holding the ball (indexed by seat)
    pub possession_steps: [u32; 2],

    /// Times the ball changed hands
    pub possession_changes: u32,

    /// Bumps into the opponent (self-steals included)
    pub steals: [u32; 2],

    /// Moves refused by an obstacle
    pub blocked_moves: [u32; 2],
}

impl EpisodeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed step
    pub fn record_step(&mut self, reward: i32, possession: PlayerId) {
        self.total_steps += 1;
        self.cumulative_reward += reward;
        self.possession_steps[possession.index()] += 1;
    }

    pub fn record_move(&mut self, mover: PlayerId, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Stole => self.steals[mover.index()] += 1,
            MoveOutcome::Blocked => self.blocked_moves[mover.index()] += 1,
            MoveOutcome::Moved | MoveOutcome::Stayed => {}
        }
    }

    pub fn record_possession_change(&mut self) {
        self.possession_changes += 1;
    }

    pub fn record_goal(&mut self, scorer: PlayerId) {
        self.scorer = Some(scorer);
        self.termination_reason = TerminationReason::GoalScored;
    }

    /// A goal takes precedence over the step limit when both happen at once.
    pub fn set_termination(&mut self, reason: TerminationReason) {
        if self.termination_reason != TerminationReason::GoalScored {
            self.termination_reason = reason;
        }
    }

    /// Share of steps player one held the ball (0.5 before any step)
    pub fn player_one_possession_rate(&self) -> f32 {
        let total = self.possession_steps[0] + self.possession_steps[1];
        if total == 0 {
            0.5
        } else {
            self.possession_steps[0] as f32 / total as f32
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
