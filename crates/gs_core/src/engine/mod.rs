pub mod actions;
pub mod config;
pub mod env;
pub mod field;
pub mod movement;
pub mod observation;
pub mod registry; // Named presets (GridSoccer-6x4, GridSoccer-8x6, walled variants)
pub mod reward;
pub mod snapshot; // Read-only view for renderers and observation builders
pub mod state;
pub mod types;

pub use actions::{Action, ActionSpace};
pub use config::{EnvConfig, Variant};
pub use env::{GridSoccerEnv, StepInfo, StepReport, StepResult};
pub use field::{GridSpec, ObstacleSet};
pub use movement::MoveOutcome;
pub use observation::{Observation, ObservationSpace};
pub use snapshot::StateSnapshot;
pub use state::EpisodeState;
pub use types::{Cell, PlayerId};
