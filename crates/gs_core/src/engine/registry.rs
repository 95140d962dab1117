//! Named environment presets
//!
//! | id                     | grid | max steps | variant |
//! |------------------------|------|-----------|---------|
//! | `GridSoccer-6x4`       | 6x4  | 50        | open    |
//! | `GridSoccer-8x6`       | 8x6  | 100       | open    |
//! | `GridSoccerWalled-6x4` | 6x4  | 50        | walled  |
//! | `GridSoccerWalled-8x6` | 8x6  | 100       | walled  |

use super::config::{EnvConfig, Variant};
use super::env::GridSoccerEnv;
use crate::error::{EnvError, Result};

/// One registered preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvSpec {
    pub id: &'static str,
    pub width: i32,
    pub height: i32,
    pub max_steps: u32,
    pub variant: Variant,
}

impl EnvSpec {
    pub fn config(&self) -> EnvConfig {
        EnvConfig::new(self.width, self.height, self.max_steps).with_variant(self.variant)
    }
}

pub const REGISTRY: [EnvSpec; 4] = [
    EnvSpec { id: "GridSoccer-6x4", width: 6, height: 4, max_steps: 50, variant: Variant::Open },
    EnvSpec { id: "GridSoccer-8x6", width: 8, height: 6, max_steps: 100, variant: Variant::Open },
    EnvSpec {
        id: "GridSoccerWalled-6x4",
        width: 6,
        height: 4,
        max_steps: 50,
        variant: Variant::Walled,
    },
    EnvSpec {
        id: "GridSoccerWalled-8x6",
        width: 8,
        height: 6,
        max_steps: 100,
        variant: Variant::Walled,
    },
];

/// Look up a preset by id
pub fn spec(id: &str) -> Result<EnvSpec> {
    REGISTRY
        .iter()
        .find(|s| s.id == id)
        .copied()
        .ok_or_else(|| EnvError::UnknownEnv(id.to_string()))
}

/// Construct a registered environment, optionally seeded
pub fn make(id: &str, seed: Option<u64>) -> Result<GridSoccerEnv> {
    let mut config = spec(id)?.config();
    config.seed = seed;
    GridSoccerEnv::new(config)
}

pub fn ids() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|s| s.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_construct() {
        for id in ids() {
            let env = make(id, Some(1)).unwrap();
            assert_eq!(env.step_count(), 0);
        }
    }

    #[test]
    fn test_small_and_large() {
        let small = make("GridSoccer-6x4", Some(1)).unwrap();
        assert_eq!((small.grid().width, small.grid().height, small.max_steps()), (6, 4, 50));

        let large = make("GridSoccerWalled-8x6", None).unwrap();
        assert_eq!(large.max_steps(), 100);
        assert_eq!(large.variant(), Variant::Walled);
        assert_eq!(large.obstacles().len(), 8);
    }

    #[test]
    fn test_unknown_id() {
        let err = make("GridSoccer-99x99", None).unwrap_err();
        assert_eq!(err, EnvError::UnknownEnv("GridSoccer-99x99".into()));
    }
}
