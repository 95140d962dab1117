//! Cell: integer grid coordinate
//!
//! Row 0 is the top row, so "up" decreases `y`. Cells are `Copy` values;
//! a move produces a new cell instead of mutating the old one.

use serde::{Deserialize, Serialize};

/// Grid cell (column `x`, row `y`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by a unit displacement; bounds are the caller's concern.
    #[inline]
    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Mirror across the vertical centre line of a grid `width` columns wide.
    #[inline]
    pub fn mirrored_x(self, width: i32) -> Self {
        Self { x: width - 1 - self.x, y: self.y }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (i32, i32) {
    fn from(c: Cell) -> Self {
        (c.x, c.y)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let c = Cell::new(2, 3);
        assert_eq!(c.offset((1, 0)), Cell::new(3, 3));
        assert_eq!(c.offset((0, -1)), Cell::new(2, 2));
        // original untouched
        assert_eq!(c, Cell::new(2, 3));
    }

    #[test]
    fn test_mirrored_x() {
        assert_eq!(Cell::new(0, 1).mirrored_x(6), Cell::new(5, 1));
        assert_eq!(Cell::new(4, 2).mirrored_x(8), Cell::new(3, 2));
        assert_eq!(Cell::new(4, 2).mirrored_x(8).mirrored_x(8), Cell::new(4, 2));
    }
}
