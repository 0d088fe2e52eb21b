//! Error types for the grid world.
//!
//! Every variant is a caller error: the world never retries or silently
//! corrects a rejected call.

use ecosys_data::EntityError;
use thiserror::Error;

/// Main error type for environment operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// An argument named something that is not an entity kind.
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// Action index outside `0..=3`.
    #[error("Invalid action: {0}")]
    InvalidAction(i64),

    /// `step` called before `reset`, or after termination without a new `reset`.
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),

    /// Configuration rejected at `reset` or construction time.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for environment operations.
pub type Result<T> = std::result::Result<T, EnvError>;

impl EnvError {
    /// Creates a new invalid sequence error.
    #[must_use]
    pub fn invalid_sequence<S: Into<String>>(msg: S) -> Self {
        Self::InvalidSequence(msg.into())
    }

    /// Creates a new configuration error.
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

impl From<EntityError> for EnvError {
    fn from(err: EntityError) -> Self {
        match err {
            EntityError::TypeMismatch(tag) => {
                Self::TypeMismatch(format!("'{tag}' is not a recognized entity kind"))
            }
            EntityError::InvalidAction(action) => Self::InvalidAction(action),
        }
    }
}

impl From<anyhow::Error> for EnvError {
    fn from(err: anyhow::Error) -> Self {
        Self::Config(format!("{err:#}"))
    }
}
