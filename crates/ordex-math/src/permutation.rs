//! Log-space permutation counts and ordered-draw probabilities.
//!
//! Permutation counts grow factorially (`P(60, 60) = 60!` is about 8.3e81),
//! so every routine here works with `ln P(N, n)` and never materializes the
//! count itself. Closed forms go through `ln_gamma` rather than a product
//! loop, so a single evaluation is O(1).

use statrs::function::gamma::ln_gamma;

use crate::error::{MathError, MathResult};

/// Natural log of the permutation count `P(n_total, k) = n_total! / (n_total - k)!`.
///
/// Computed as `ln Γ(n_total + 1) - ln Γ(n_total - k + 1)`, which stays finite
/// for any `n_total` a `u32` can hold.
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] when `k > n_total` (there is no ordered
/// arrangement of more items than the population holds).
///
/// # Example
///
/// ```rust
/// use ordex_math::permutation::ln_perm;
///
/// // P(5, 2) = 20
/// let ln_p = ln_perm(5, 2).unwrap();
/// assert!((ln_p - 20.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn ln_perm(n_total: u32, k: u32) -> MathResult<f64> {
    if k > n_total {
        return Err(MathError::invalid_input(format!(
            "cannot draw {} items in order from a population of {}",
            k, n_total
        )));
    }

    let n = f64::from(n_total);
    let r = f64::from(n_total - k);
    Ok(ln_gamma(n + 1.0) - ln_gamma(r + 1.0))
}

/// Natural log of the probability that `draws` independent uniform draws from
/// a population of `population` outcomes are all distinct and appear in one
/// specific order.
///
/// This is `ln P(population, draws) - draws * ln(population)`; exponentiating
/// gives `P(N, n) / N^n`.
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] when the population is zero or when
/// `draws > population`.
pub fn ln_success_probability(population: u32, draws: u32) -> MathResult<f64> {
    if population == 0 {
        return Err(MathError::invalid_input("population must be positive"));
    }

    let ln_p = ln_perm(population, draws)?;
    Ok(ln_p - f64::from(draws) * f64::from(population).ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ln_perm_small_values() {
        // P(5, 0) = 1, P(5, 1) = 5, P(5, 2) = 20, P(5, 5) = 120
        assert_relative_eq!(ln_perm(5, 0).unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(ln_perm(5, 1).unwrap(), 5.0_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(ln_perm(5, 2).unwrap(), 20.0_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(ln_perm(5, 5).unwrap(), 120.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_ln_perm_matches_direct_product() {
        // Direct f64 product is exact enough to cross-check at this scale:
        // P(60, n) tops out near 8.3e81, well inside f64 range.
        for n in 0..=60_u32 {
            let direct: f64 = (0..n).map(|i| f64::from(60 - i)).product();
            assert_relative_eq!(ln_perm(60, n).unwrap(), direct.ln(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_ln_perm_rejects_overdraw() {
        let err = ln_perm(10, 11).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput { .. }));
    }

    #[test]
    fn test_success_probability_single_draw_is_certain() {
        for population in [1_u32, 2, 17, 60, 365] {
            let p = ln_success_probability(population, 1).unwrap().exp();
            assert_relative_eq!(p, 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_success_probability_two_draws() {
        // p(2) = (N - 1) / N
        let p = ln_success_probability(60, 2).unwrap().exp();
        assert_relative_eq!(p, 59.0 / 60.0, epsilon = 1e-10);
    }

    #[test]
    fn test_success_probability_full_permutation() {
        // p(N) = N! / N^N, strictly inside (0, 1) for N > 1
        let p = ln_success_probability(60, 60).unwrap().exp();
        assert!(p > 0.0 && p < 1.0);
        assert_relative_eq!(p, 1.702550e-25, max_relative = 1e-5);
    }

    #[test]
    fn test_success_probability_zero_population() {
        let err = ln_success_probability(0, 1).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput { .. }));
    }
}
