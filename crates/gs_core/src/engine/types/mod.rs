//! Engine Types
//!
//! Value types shared by the simulation, observation and render layers.

pub mod cell;
pub use cell::Cell;

use serde::{Deserialize, Serialize};

// ===========================================
// Player identity
// ===========================================

/// One of the two seats. Possession is stored as a `PlayerId`, so "nobody"
/// and "both" cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    #[inline]
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Array slot (0 or 1)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Gym-facing id (1 or 2)
    #[inline]
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Player one attacks the right edge, player two the left edge.
    #[inline]
    pub fn attacks_right(self) -> bool {
        self == PlayerId::One
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for p in PlayerId::BOTH {
            assert_ne!(p, p.opponent());
            assert_eq!(p, p.opponent().opponent());
        }
    }

    #[test]
    fn test_numbering() {
        assert_eq!(PlayerId::One.number(), 1);
        assert_eq!(PlayerId::Two.number(), 2);
        assert_eq!(PlayerId::Two.index(), 1);
        assert_eq!(PlayerId::One.to_string(), "player1");
    }
}
