//! Pitch geometry: grid bounds, goal mouths and the obstacle set.
//!
//! Both are fixed at construction and survive episode resets.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::Variant;
use super::types::{Cell, PlayerId};

// ============================================================================
// GridSpec
// ============================================================================

/// Immutable grid size.
///
/// The goal mouth on each vertical edge spans rows `height/2 - 1` and
/// `height/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSpec {
    pub width: i32,
    pub height: i32,
}

impl GridSpec {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Clamp a cell into the grid. Edge pushes are silently absorbed.
    #[inline]
    pub fn clamp(&self, cell: Cell) -> Cell {
        Cell::new(cell.x.clamp(0, self.width - 1), cell.y.clamp(0, self.height - 1))
    }

    /// The two goal-mouth rows, top first
    #[inline]
    pub fn goal_rows(&self) -> [i32; 2] {
        [self.height / 2 - 1, self.height / 2]
    }

    #[inline]
    pub fn is_goal_row(&self, y: i32) -> bool {
        self.goal_rows().contains(&y)
    }

    /// Column a player has to reach with the ball to score
    #[inline]
    pub fn goal_line_for(&self, scorer: PlayerId) -> i32 {
        if scorer.attacks_right() {
            self.width - 1
        } else {
            0
        }
    }

    /// True when `cell` lies in the goal mouth `scorer` attacks.
    #[inline]
    pub fn in_goal_mouth(&self, scorer: PlayerId, cell: Cell) -> bool {
        cell.x == self.goal_line_for(scorer) && self.is_goal_row(cell.y)
    }

    /// Largest coordinate value an observation can carry
    #[inline]
    pub fn max_edge(&self) -> i32 {
        self.width.max(self.height)
    }
}

// ============================================================================
// ObstacleSet
// ============================================================================

/// Impassable cells. Empty for the open variant; for the walled variant, the
/// left and right edge columns minus the goal-mouth rows.
///
/// The row-major list is built once; snapshots share it instead of copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleSet {
    cells: FxHashSet<Cell>,
    sorted: Arc<[Cell]>,
}

impl Default for ObstacleSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl ObstacleSet {
    pub fn empty() -> Self {
        Self { cells: FxHashSet::default(), sorted: Arc::from(Vec::new()) }
    }

    fn from_cells(cells: FxHashSet<Cell>) -> Self {
        let mut sorted: Vec<Cell> = cells.iter().copied().collect();
        sorted.sort_by_key(|c| (c.y, c.x));
        Self { cells, sorted: Arc::from(sorted) }
    }

    /// Build the set for `variant` on `grid`
    pub fn for_variant(grid: &GridSpec, variant: Variant) -> Self {
        match variant {
            Variant::Open => Self::empty(),
            Variant::Walled => Self::goal_flanks(grid),
        }
    }

    fn goal_flanks(grid: &GridSpec) -> Self {
        let mut cells = FxHashSet::default();
        for y in (0..grid.height).filter(|y| !grid.is_goal_row(*y)) {
            cells.insert(Cell::new(0, y));
            cells.insert(Cell::new(grid.width - 1, y));
        }
        Self::from_cells(cells)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in row-major order. Cloning the handle does not copy the cells.
    pub fn sorted_cells(&self) -> Arc<[Cell]> {
        Arc::clone(&self.sorted)
    }
}
