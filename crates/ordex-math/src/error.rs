//! Error types for expected-value computations.

use thiserror::Error;

/// A specialized Result type for expected-value computations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur when building or evaluating a draw policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
