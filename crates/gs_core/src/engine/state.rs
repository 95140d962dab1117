//! Mutable per-episode state.
//!
//! Created by `reset`, mutated only by `step`.

use serde::{Deserialize, Serialize};

use super::types::{Cell, PlayerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeState {
    /// Steps since the last reset
    pub step_count: u32,
    /// Indexed by `PlayerId::index()`
    pub positions: [Cell; 2],
    /// Current ball holder
    pub possession: PlayerId,
}

impl EpisodeState {
    pub fn new(p1: Cell, p2: Cell, possession: PlayerId) -> Self {
        Self { step_count: 0, positions: [p1, p2], possession }
    }

    #[inline]
    pub fn position_of(&self, player: PlayerId) -> Cell {
        self.positions[player.index()]
    }

    /// Replace a player's cell wholesale
    #[inline]
    pub fn set_position(&mut self, player: PlayerId, cell: Cell) {
        self.positions[player.index()] = cell;
    }

    #[inline]
    pub fn has_ball(&self, player: PlayerId) -> bool {
        self.possession == player
    }
}
