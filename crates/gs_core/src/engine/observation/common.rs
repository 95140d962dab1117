//! Common Observation Utilities

use crate::engine::types::{Cell, PlayerId};

// =============================================================================
// TeamView Coordinate Transformations
// =============================================================================

/// Convert a cell to the seat's TeamView
///
/// TeamView: the seat attacks towards `width - 1`. Player one already does;
/// player two's columns are mirrored. Rows are never mirrored.
///
/// # Arguments
/// * `cell` - Cell in world coordinates
/// * `width` - Grid width in columns
/// * `seat` - Observing player
///
/// # Returns
/// The cell as `seat` sees it
#[inline]
pub fn to_team_view_cell(cell: Cell, width: i32, seat: PlayerId) -> Cell {
    if seat.attacks_right() {
        cell
    } else {
        cell.mirrored_x(width)
    }
}
