//! # Environment Configuration
//!
//! Everything an environment needs at construction: grid size, episode step
//! limit, variant and an optional RNG seed.
//!
//! ## Presets
//! ```rust
//! use gs_core::engine::config::{EnvConfig, Variant};
//!
//! let small = EnvConfig::small();
//! let walled = EnvConfig::large().with_variant(Variant::Walled);
//! assert!(small.validated().is_ok());
//! assert!(walled.validated().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::{EnvError, Result};

/// Largest accepted grid edge
pub const MAX_GRID_EDGE: i32 = 1024;

/// Smallest width that leaves a spawn column for player one in the walled
/// variant (`x ∈ [1, width/2 - 2]`).
pub const MIN_WALLED_WIDTH: i32 = 6;

/// Open pitch or pitch with obstacle columns beside the goal mouths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Open,
    Walled,
}

impl Variant {
    pub fn is_walled(self) -> bool {
        self == Variant::Walled
    }
}

/// Environment construction parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_walled_width"))]
pub struct EnvConfig {
    /// Columns (x axis)
    #[validate(range(min = 4, max = 1024))]
    pub width: i32,
    /// Rows (y axis)
    #[validate(range(min = 4, max = 1024))]
    pub height: i32,
    /// Episode truncates once this many steps have elapsed
    #[validate(range(min = 1))]
    pub max_steps: u32,
    #[serde(default)]
    pub variant: Variant,
    /// `None` seeds from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

fn validate_walled_width(cfg: &EnvConfig) -> std::result::Result<(), ValidationError> {
    if cfg.variant.is_walled() && cfg.width < MIN_WALLED_WIDTH {
        return Err(ValidationError::new("walled_width"));
    }
    Ok(())
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::small()
    }
}

impl EnvConfig {
    pub fn new(width: i32, height: i32, max_steps: u32) -> Self {
        Self { width, height, max_steps, variant: Variant::Open, seed: None }
    }

    /// 6x4 grid, 50 steps
    pub fn small() -> Self {
        Self::new(6, 4, 50)
    }

    /// 8x6 grid, 100 steps
    pub fn large() -> Self {
        Self::new(8, 6, 100)
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: EnvConfig = serde_json::from_str(json)?;
        cfg.validated()
    }

    /// Check the config and hand it back, mapping rule failures to [`EnvError`].
    pub fn validated(self) -> Result<Self> {
        match self.validate() {
            Ok(()) => Ok(self),
            Err(errors) => {
                if errors.field_errors().contains_key("max_steps") {
                    return Err(EnvError::InvalidMaxSteps(self.max_steps));
                }
                let reason = if errors.field_errors().contains_key("width")
                    || errors.field_errors().contains_key("height")
                {
                    format!("width and height must be within 4..={}", MAX_GRID_EDGE)
                } else {
                    format!("walled variant needs width >= {}", MIN_WALLED_WIDTH)
                };
                Err(EnvError::InvalidGrid { width: self.width, height: self.height, reason })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for cfg in [EnvConfig::small(), EnvConfig::large()] {
            assert!(cfg.clone().validated().is_ok());
            assert!(cfg.with_variant(Variant::Walled).validated().is_ok());
        }
    }

    #[test]
    fn test_small_grid_rejected() {
        let err = EnvConfig::new(3, 4, 10).validated().unwrap_err();
        assert!(matches!(err, EnvError::InvalidGrid { width: 3, .. }));

        let err = EnvConfig::new(6, 1, 10).validated().unwrap_err();
        assert!(matches!(err, EnvError::InvalidGrid { height: 1, .. }));
    }

    #[test]
    fn test_zero_max_steps_rejected() {
        let err = EnvConfig::new(6, 4, 0).validated().unwrap_err();
        assert_eq!(err, EnvError::InvalidMaxSteps(0));
    }

    #[test]
    fn test_walled_needs_spawn_column() {
        assert!(EnvConfig::new(4, 4, 10).validated().is_ok());
        let err = EnvConfig::new(4, 4, 10).with_variant(Variant::Walled).validated().unwrap_err();
        match err {
            EnvError::InvalidGrid { reason, .. } => assert!(reason.contains("walled")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_json_defaults() {
        let cfg = EnvConfig::from_json(r#"{"width": 8, "height": 6, "max_steps": 100}"#).unwrap();
        assert_eq!(cfg, EnvConfig::large());

        let cfg = EnvConfig::from_json(
            r#"{"width": 8, "height": 6, "max_steps": 100, "variant": "walled", "seed": 7}"#,
        )
        .unwrap();
        assert_eq!(cfg.variant, Variant::Walled);
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn test_from_json_bad_input() {
        assert!(matches!(EnvConfig::from_json("{"), Err(EnvError::Config(_))));
        assert!(matches!(
            EnvConfig::from_json(r#"{"width": 2, "height": 6, "max_steps": 1}"#),
            Err(EnvError::InvalidGrid { .. })
        ));
    }
}
