use thiserror::Error;

/// Errors raised by environment construction and the raw action surface.
///
/// `reset` and typed `step` never fail once an environment exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("Invalid grid {width}x{height}: {reason}")]
    InvalidGrid { width: i32, height: i32, reason: String },

    #[error("Invalid max_steps: {0} (must be >= 1)")]
    InvalidMaxSteps(u32),

    #[error("Invalid action code {code} (expected 0..=4)")]
    InvalidAction { code: i64 },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Unknown environment id: {0}")]
    UnknownEnv(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl EnvError {
    /// Construction-time failures; the caller has to fix its parameters.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            EnvError::InvalidGrid { .. }
                | EnvError::InvalidMaxSteps(_)
                | EnvError::UnknownEnv(_)
                | EnvError::Config(_)
        )
    }
}

impl From<serde_json::Error> for EnvError {
    fn from(err: serde_json::Error) -> Self {
        EnvError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EnvError>;
