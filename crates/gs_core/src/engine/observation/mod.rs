//! Observation Module - snapshot-based egocentric observations
//!
//! ## Design Principles
//!
//! 1. **Snapshot only**: observations are derived from [`StateSnapshot`], never
//!    from the environment itself
//! 2. **Seat symmetry**: player two sees the pitch mirrored so that both
//!    seats attack towards larger x
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gs_core::engine::observation::{EgocentricBuilder, ObservationBuilder};
//!
//! let snap = env.snapshot();
//! let obs = EgocentricBuilder.build(&snap, PlayerId::Two);
//! let flat = obs.to_array(); // [my_x, my_y, opp_x, opp_y, has_ball]
//! ```
//!
//! [`StateSnapshot`]: crate::engine::snapshot::StateSnapshot

mod builder;
mod common;
mod egocentric;

pub use builder::ObservationBuilder;
pub use common::to_team_view_cell;
pub use egocentric::{EgocentricBuilder, Observation, ObservationSpace};
