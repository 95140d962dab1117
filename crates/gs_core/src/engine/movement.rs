//! Single-mover resolution.
//!
//! One mover is resolved against the opponent's position *as it stands now*.
//! The step loop calls this twice in a coin-flipped order, so the second mover
//! sees the first mover's new cell.

use serde::{Deserialize, Serialize};

use super::actions::Action;
use super::field::{GridSpec, ObstacleSet};
use super::types::Cell;

/// What happened to one mover in one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    /// Relocated to a new cell
    Moved,
    /// Stay action, or a push against the grid edge that clamped back in place
    Stayed,
    /// Bumped into the opponent's cell: stays put and takes the ball
    Stole,
    /// Candidate cell is an obstacle
    Blocked,
}

/// Resolved move: the mover's cell after this resolution plus the outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub cell: Cell,
    pub outcome: MoveOutcome,
}

impl Resolution {
    #[inline]
    pub fn takes_ball(&self) -> bool {
        self.outcome == MoveOutcome::Stole
    }
}

/// Resolve one mover.
///
/// 1. candidate = clamp(mover + delta)
/// 2. candidate == opponent  -> stay, steal (self-steal is a no-op for the holder)
/// 3. candidate is obstacle  -> stay
/// 4. otherwise              -> move
///
/// # Arguments
/// * `grid` - Pitch bounds used for clamping
/// * `obstacles` - Impassable cells (empty for the open variant)
/// * `mover` - Mover's current cell
/// * `opponent` - Opponent's cell at the moment of resolution
/// * `action` - Mover's physical action
///
/// # Returns
/// The mover's cell afterwards and what happened; possession is left to the
/// caller
pub fn resolve_move(
    grid: &GridSpec,
    obstacles: &ObstacleSet,
    mover: Cell,
    opponent: Cell,
    action: Action,
) -> Resolution {
    let candidate = grid.clamp(mover.offset(action.delta()));

    if candidate == opponent {
        return Resolution { cell: mover, outcome: MoveOutcome::Stole };
    }
    if obstacles.contains(candidate) {
        return Resolution { cell: mover, outcome: MoveOutcome::Blocked };
    }

    let outcome = if candidate == mover { MoveOutcome::Stayed } else { MoveOutcome::Moved };
    Resolution { cell: candidate, outcome }
}
