//! # gs_core - Two-Player Grid Soccer Environment
//!
//! A small reinforcement-learning environment: two players on a discrete grid
//! fight over one ball. Bumping into the ball holder steals it; carrying the
//! ball into the goal mouth on the opponent's edge scores.
//!
//! ## Features
//! - Gym-style `reset` / `step` for two simultaneous agents
//! - Egocentric observations: player two sees a mirrored pitch
//! - Open and walled variants from one rule set
//! - Seeded `ChaCha8Rng`: same seed + same actions = same episode
//!
//! ```rust
//! use gs_core::{registry, Action};
//!
//! let mut env = registry::make("GridSoccer-6x4", Some(42)).unwrap();
//! let [obs1, obs2] = env.reset();
//! assert_eq!(obs1.to_array().len(), 5);
//! assert_eq!(obs1.has_ball, !obs2.has_ball);
//!
//! let result = env.step(Action::Right, Action::Left);
//! assert!((-1..=1).contains(&result.reward));
//! ```

pub mod engine;
pub mod error;
pub mod policy;
pub mod render;
pub mod rollout;

pub use engine::registry;
pub use engine::{
    Action, ActionSpace, Cell, EnvConfig, EpisodeState, GridSoccerEnv, GridSpec, MoveOutcome,
    Observation, ObservationSpace, PlayerId, StateSnapshot, StepReport, StepResult, Variant,
};
pub use error::{EnvError, Result};
pub use policy::{ChaserPolicy, Policy, RandomPolicy};
pub use render::{AsciiRenderer, RenderError, RenderSession, Renderer};
pub use rollout::{run_episode, EpisodeSummary};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
