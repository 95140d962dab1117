//! Reward - goal detection and episode bookkeeping
//!
//! ## Components
//!
//! - [`detect_goal`]: who (if anyone) scored in the current state
//! - [`SparseGoalReward`]: +1 / -1 / 0 from one seat's perspective
//! - [`EpisodeMetrics`]: per-episode counters (reset with the episode)

mod episode;
mod sparse;

pub use episode::{EpisodeMetrics, TerminationReason};
pub use sparse::SparseGoalReward;

use super::field::GridSpec;
use super::state::EpisodeState;
use super::types::PlayerId;

// ============================================================================
// Goal detection
// ============================================================================

/// The ball holder scores when standing in the goal mouth it attacks.
///
/// Only the holder is checked, so at most one player can score per step.
///
/// # Returns
/// The scorer, or `None` when nobody scored
pub fn detect_goal(grid: &GridSpec, state: &EpisodeState) -> Option<PlayerId> {
    let holder = state.possession;
    grid.in_goal_mouth(holder, state.position_of(holder)).then_some(holder)
}
