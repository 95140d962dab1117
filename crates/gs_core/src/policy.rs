//! Baseline policies: egocentric observation -> action
//!
//! Policies act in their own TeamView (attacking towards larger x). The same
//! policy therefore plays either seat; [`world_action`] turns its choice back
//! into a physical move.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::engine::actions::Action;
use crate::engine::config::Variant;
use crate::engine::env::GridSoccerEnv;
use crate::engine::field::{GridSpec, ObstacleSet};
use crate::engine::observation::Observation;
use crate::engine::types::{Cell, PlayerId};

pub trait Policy {
    /// Pick a TeamView action for `obs`.
    fn act(&mut self, obs: &Observation) -> Action;

    fn name(&self) -> &str;
}

/// Physical action for a TeamView action taken from `seat`.
#[inline]
pub fn world_action(seat: PlayerId, action: Action) -> Action {
    if seat.attacks_right() {
        action
    } else {
        action.mirrored()
    }
}

// ============================================================================
// Random Policy
// ============================================================================

/// Uniform over the five actions
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _obs: &Observation) -> Action {
        Action::ALL[self.rng.gen_range(0..Action::COUNT)]
    }

    fn name(&self) -> &str {
        "random"
    }
}

// ============================================================================
// Chaser Policy
// ============================================================================

/// Greedy baseline.
///
/// Without the ball it closes the larger axis gap to the opponent (a bump on
/// arrival is the steal). With the ball it lines up with a goal-mouth row,
/// then runs for the attacking edge. Moves into obstacles or into the
/// opponent while holding the ball are swapped for a free sidestep.
#[derive(Debug, Clone)]
pub struct ChaserPolicy {
    grid: GridSpec,
    // walled flanks are mirror-symmetric, so world cells equal TeamView cells
    obstacles: ObstacleSet,
}

impl ChaserPolicy {
    /// Chaser for an open pitch
    pub fn new(grid: GridSpec) -> Self {
        Self::with_variant(grid, Variant::Open)
    }

    pub fn with_variant(grid: GridSpec, variant: Variant) -> Self {
        Self { grid, obstacles: ObstacleSet::for_variant(&grid, variant) }
    }

    /// Chaser that knows `env`'s pitch and obstacles
    pub fn for_env(env: &GridSoccerEnv) -> Self {
        Self::with_variant(env.grid(), env.variant())
    }

    /// `action` actually relocates `me` without bumping `opponent` or hitting
    /// an obstacle
    fn is_free(&self, me: Cell, opponent: Cell, action: Action) -> bool {
        let next = self.grid.clamp(me.offset(action.delta()));
        next != me && next != opponent && !self.obstacles.contains(next)
    }

    fn toward(&self, me: Cell, target: Cell) -> Action {
        let (dx, dy) = (target.x - me.x, target.y - me.y);
        if dx == 0 && dy == 0 {
            return Action::Stay;
        }

        let horizontal = if dx > 0 { Action::Right } else { Action::Left };
        let vertical = if dy > 0 { Action::Down } else { Action::Up };
        let (major, minor) = if dx.abs() >= dy.abs() {
            (horizontal, (dy != 0).then_some(vertical))
        } else {
            (vertical, (dx != 0).then_some(horizontal))
        };

        let next = self.grid.clamp(me.offset(major.delta()));
        match minor {
            Some(minor) if self.obstacles.contains(next) => minor,
            _ => major,
        }
    }
}

impl Policy for ChaserPolicy {
    fn act(&mut self, obs: &Observation) -> Action {
        if !obs.has_ball {
            return self.toward(obs.me, obs.opponent);
        }

        let [top, bottom] = self.grid.goal_rows();
        let (preferred, sidesteps) = if obs.me.y < top {
            (Action::Down, [Action::Right, Action::Left])
        } else if obs.me.y > bottom {
            (Action::Up, [Action::Right, Action::Left])
        } else if obs.me.y == top {
            (Action::Right, [Action::Down, Action::Up])
        } else {
            (Action::Right, [Action::Up, Action::Down])
        };

        // bumping the opponent while holding the ball goes nowhere
        if self.is_free(obs.me, obs.opponent, preferred) {
            return preferred;
        }
        sidesteps
            .into_iter()
            .find(|a| self.is_free(obs.me, obs.opponent, *a))
            .unwrap_or(preferred)
    }

    fn name(&self) -> &str {
        "chaser"
    }
}
