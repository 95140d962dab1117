//! Discrete per-player actions
//!
//! Gym codes: 0=stay, 1=up, 2=down, 3=left, 4=right.
//! Raw codes outside that range are rejected with [`EnvError::InvalidAction`]
//! instead of being treated as "stay".

use serde::{Deserialize, Serialize};

use crate::error::EnvError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    #[default]
    Stay,
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Size of the discrete action space per player
    pub const COUNT: usize = 5;

    /// All actions in code order
    pub const ALL: [Action; Self::COUNT] =
        [Action::Stay, Action::Up, Action::Down, Action::Left, Action::Right];

    /// Unit displacement `(dx, dy)`; row 0 is the top row.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Action::Stay => (0, 0),
            Action::Up => (0, -1),
            Action::Down => (0, 1),
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Action::Stay => 0,
            Action::Up => 1,
            Action::Down => 2,
            Action::Left => 3,
            Action::Right => 4,
        }
    }

    /// Same move as seen from the other seat (left and right swap).
    pub fn mirrored(self) -> Action {
        match self {
            Action::Left => Action::Right,
            Action::Right => Action::Left,
            other => other,
        }
    }
}

/// Discrete action space metadata: one choice per player per step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpace {
    /// Choices per player
    pub n: usize,
}

impl Default for ActionSpace {
    fn default() -> Self {
        Self { n: Action::COUNT }
    }
}

impl ActionSpace {
    pub fn contains(&self, code: i64) -> bool {
        (0..self.n as i64).contains(&code)
    }
}

impl TryFrom<i64> for Action {
    type Error = EnvError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Action::Stay),
            1 => Ok(Action::Up),
            2 => Ok(Action::Down),
            3 => Ok(Action::Left),
            4 => Ok(Action::Right),
            _ => Err(EnvError::InvalidAction { code }),
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = EnvError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Action::try_from(code as i64)
    }
}

impl TryFrom<usize> for Action {
    type Error = EnvError;

    fn try_from(code: usize) -> Result<Self, Self::Error> {
        let code = i64::try_from(code).unwrap_or(i64::MAX);
        Action::try_from(code)
    }
}

impl From<Action> for u8 {
    fn from(action: Action) -> Self {
        action.code()
    }
}
