//! ObservationBuilder Trait

use crate::engine::snapshot::StateSnapshot;
use crate::engine::types::PlayerId;

/// Observation builder trait
///
/// Implementations read the snapshot only and must not hold on to engine state.
pub trait ObservationBuilder {
    /// Output observation type
    type Output;

    /// Build the observation `seat` receives
    ///
    /// # Arguments
    /// * `snapshot` - Immutable state snapshot
    /// * `seat` - Observing player
    ///
    /// # Returns
    /// Observation in the seat's TeamView (attacking towards larger x)
    fn build(&self, snapshot: &StateSnapshot, seat: PlayerId) -> Self::Output;
}
