//! Error types for logical evaluation

use thiserror::Error;

/// Result type alias for logical operations
pub type Result<T> = std::result::Result<T, LogicalError>;

/// Error type for logical operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicalError {
    /// The supplied input was not a condition sequence
    #[error("invalid input: expected a condition sequence, got {actual}")]
    InvalidInput {
        /// Type name of the value that was supplied instead
        actual: String,
    },
}

impl LogicalError {
    /// Create an invalid input error naming the offending type
    pub fn invalid_input(actual: impl Into<String>) -> Self {
        Self::InvalidInput {
            actual: actual.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_constructor() {
        let err = LogicalError::invalid_input("Integer");
        assert!(matches!(err, LogicalError::InvalidInput { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LogicalError::invalid_input("Object");
        assert_eq!(
            err.to_string(),
            "invalid input: expected a condition sequence, got Object"
        );
    }
}
