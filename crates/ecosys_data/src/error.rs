//! Error types for entity-level operations.

use thiserror::Error;

/// Errors raised while building or addressing entities from untyped input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// A kind tag that names no known entity kind.
    #[error("Type mismatch: '{0}' is not a recognized entity kind")]
    TypeMismatch(String),

    /// An action index outside `0..=3`.
    #[error("Invalid action: {0} (expected 0=up, 1=right, 2=down, 3=left)")]
    InvalidAction(i64),
}

impl EntityError {
    /// Creates a new type mismatch error.
    #[must_use]
    pub fn type_mismatch<S: Into<String>>(tag: S) -> Self {
        Self::TypeMismatch(tag.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EntityError::type_mismatch("carnivore");
        assert_eq!(
            err.to_string(),
            "Type mismatch: 'carnivore' is not a recognized entity kind"
        );
    }

    #[test]
    fn test_invalid_action_display() {
        let err = EntityError::InvalidAction(7);
        assert!(err.to_string().contains('7'));
    }
}
