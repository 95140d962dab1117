//! Egocentric 5-integer observation
//!
//! ## Layout
//! ```text
//! [0] my x       (TeamView: attacking goal at width-1)
//! [1] my y
//! [2] opponent x (TeamView)
//! [3] opponent y
//! [4] 1 if I hold the ball, else 0
//! ```

use serde::{Deserialize, Serialize};

use super::common::to_team_view_cell;
use super::ObservationBuilder;
use crate::engine::field::GridSpec;
use crate::engine::snapshot::StateSnapshot;
use crate::engine::types::{Cell, PlayerId};

// =============================================================================
// Observation
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    pub me: Cell,
    pub opponent: Cell,
    pub has_ball: bool,
}

impl Observation {
    /// Length of the flat vector
    pub const LEN: usize = 5;

    pub fn to_array(&self) -> [i32; Self::LEN] {
        [self.me.x, self.me.y, self.opponent.x, self.opponent.y, self.has_ball as i32]
    }

    pub fn from_array(v: [i32; Self::LEN]) -> Self {
        Self {
            me: Cell::new(v[0], v[1]),
            opponent: Cell::new(v[2], v[3]),
            has_ball: v[4] != 0,
        }
    }
}

// =============================================================================
// Observation space metadata
// =============================================================================

/// Box-space bounds for one seat's observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSpace {
    pub shape: usize,
    pub low: i32,
    pub high: i32,
}

impl ObservationSpace {
    pub fn for_grid(grid: &GridSpec) -> Self {
        Self { shape: Observation::LEN, low: 0, high: grid.max_edge() }
    }

    pub fn contains(&self, obs: &Observation) -> bool {
        obs.to_array().iter().all(|v| (self.low..=self.high).contains(v))
    }
}

// =============================================================================
// EgocentricBuilder
// =============================================================================

/// Builds the mirrored-per-seat observation
pub struct EgocentricBuilder;

impl ObservationBuilder for EgocentricBuilder {
    type Output = Observation;

    fn build(&self, snapshot: &StateSnapshot, seat: PlayerId) -> Self::Output {
        let width = snapshot.grid.width;
        Observation {
            me: to_team_view_cell(snapshot.position_of(seat), width, seat),
            opponent: to_team_view_cell(snapshot.position_of(seat.opponent()), width, seat),
            has_ball: snapshot.possession == seat,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
