//! CLI command implementations.

pub mod optimize;
pub mod sweep;

// Re-export submodules for convenience
pub use optimize::OptimizeArgs;
pub use sweep::SweepArgs;

use crate::error::{CliError, CliResult};

/// Validates a population size.
pub fn validate_population(population: u32) -> CliResult<u32> {
    if population == 0 {
        return Err(CliError::InvalidPopulation(population));
    }
    Ok(population)
}

/// Validates a payout multiplier.
pub fn validate_payout(payout: f64) -> CliResult<f64> {
    if !payout.is_finite() || payout <= 0.0 {
        return Err(CliError::InvalidPayout(payout));
    }
    Ok(payout)
}
