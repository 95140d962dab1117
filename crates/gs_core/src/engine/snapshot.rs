//! StateSnapshot: read-only copy of everything an observer may look at.
//!
//! Renderers and observation builders take a snapshot; they never get a
//! handle to the environment itself.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::config::Variant;
use super::field::{GridSpec, ObstacleSet};
use super::state::EpisodeState;
use super::types::{Cell, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub grid: GridSpec,
    pub variant: Variant,
    /// Row-major obstacle cells (empty for the open variant), shared with the
    /// environment
    pub obstacles: Arc<[Cell]>,
    pub positions: [Cell; 2],
    pub possession: PlayerId,
    pub step_count: u32,
    pub max_steps: u32,
}

impl StateSnapshot {
    pub fn capture(
        grid: GridSpec,
        variant: Variant,
        obstacles: &ObstacleSet,
        state: &EpisodeState,
        max_steps: u32,
    ) -> Self {
        Self {
            grid,
            variant,
            obstacles: obstacles.sorted_cells(),
            positions: state.positions,
            possession: state.possession,
            step_count: state.step_count,
            max_steps,
        }
    }

    #[inline]
    pub fn position_of(&self, player: PlayerId) -> Cell {
        self.positions[player.index()]
    }

    #[inline]
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.obstacles.binary_search_by_key(&(cell.y, cell.x), |c| (c.y, c.x)).is_ok()
    }

    /// Player standing on `cell`, if any
    pub fn occupant(&self, cell: Cell) -> Option<PlayerId> {
        PlayerId::BOTH.into_iter().find(|p| self.position_of(*p) == cell)
    }
}
