//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum CliError {
    /// Invalid population size.
    #[error("Invalid population: {0}. Must be a positive integer.")]
    InvalidPopulation(u32),

    /// Invalid payout multiplier.
    #[error("Invalid payout: {0}. Must be a positive finite number.")]
    InvalidPayout(f64),

    /// Calculation error from the math core.
    #[error("Calculation error: {0}")]
    Calculation(#[from] ordex_math::MathError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
