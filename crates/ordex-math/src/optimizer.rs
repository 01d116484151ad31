//! Expected-value sweep and argmax over candidate draw counts.
//!
//! A [`DrawPolicy`] fixes the population size and the payout per successful
//! draw; [`DrawPolicy::sweep`] evaluates the success probability and expected
//! payout for every draw count in `[1, N]`, and [`DrawPolicy::optimize`]
//! returns the draw count that maximizes expected payout.
//!
//! The sweep accumulates `ln P(N, n)` incrementally as a running sum of
//! logarithms (`ln P(N, n) = ln P(N, n-1) + ln(N - n + 1)`), so the whole
//! profile costs O(N) and no intermediate value ever overflows.

use serde::Serialize;

use crate::error::{MathError, MathResult};

/// An ordered-draw payout policy: population size plus payout per draw.
///
/// The payout scales linearly with the draw count: a successful sequence of
/// `n` draws pays `n * payout_per_draw`. Both parameters are validated at
/// construction; evaluation afterwards cannot fail.
///
/// # Example
///
/// ```rust
/// use ordex_math::optimizer::DrawPolicy;
///
/// let policy = DrawPolicy::new(60, 1_000_000.0).unwrap();
/// let best = policy.optimize();
///
/// assert_eq!(best.n, 8);
/// assert!((best.probability - 0.6142).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawPolicy {
    population: u32,
    payout_per_draw: f64,
}

/// Probability and expected payout for one candidate draw count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawOutcome {
    /// Number of draws.
    pub n: u32,
    /// Probability that all `n` draws are distinct and in the target order.
    pub probability: f64,
    /// Expected payout: `probability * n * payout_per_draw`.
    pub expected_value: f64,
}

/// The draw count that maximizes expected payout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimalDraw {
    /// Optimal number of draws.
    pub n: u32,
    /// Success probability at the optimum.
    pub probability: f64,
    /// Maximum expected payout.
    pub expected_value: f64,
}

impl DrawPolicy {
    /// Creates a policy, rejecting invalid parameters up front.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::InvalidInput`] when the population is zero or the
    /// payout per draw is not a positive finite number.
    pub fn new(population: u32, payout_per_draw: f64) -> MathResult<Self> {
        if population == 0 {
            return Err(MathError::invalid_input("population must be positive"));
        }
        if !payout_per_draw.is_finite() || payout_per_draw <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "payout per draw must be a positive finite number, got {}",
                payout_per_draw
            )));
        }

        Ok(Self {
            population,
            payout_per_draw,
        })
    }

    /// Population size `N`.
    pub fn population(&self) -> u32 {
        self.population
    }

    /// Payout multiplier per draw.
    pub fn payout_per_draw(&self) -> f64 {
        self.payout_per_draw
    }

    /// Evaluates every candidate draw count in `[1, N]` in ascending order.
    pub fn sweep(&self) -> Vec<DrawOutcome> {
        let ln_population = f64::from(self.population).ln();
        let mut ln_perm = 0.0;
        let mut outcomes = Vec::with_capacity(self.population as usize);

        for n in 1..=self.population {
            // ln P(N, n) = ln P(N, n-1) + ln(N - n + 1)
            ln_perm += f64::from(self.population - n + 1).ln();
            let probability = (ln_perm - f64::from(n) * ln_population).exp();
            let expected_value = probability * f64::from(n) * self.payout_per_draw;

            outcomes.push(DrawOutcome {
                n,
                probability,
                expected_value,
            });
        }

        outcomes
    }

    /// Returns the draw count with the maximum expected payout.
    ///
    /// Ties resolve to the smallest draw count: the scan runs in ascending
    /// `n` and only a strictly greater expected value displaces the incumbent.
    pub fn optimize(&self) -> OptimalDraw {
        let outcomes = self.sweep();

        // Domain is [1, N] with N >= 1, so the sweep is never empty.
        let mut best = outcomes[0];
        for outcome in &outcomes[1..] {
            if outcome.expected_value > best.expected_value {
                best = *outcome;
            }
        }

        log::debug!(
            "optimal draw count for N={}: n={} (EV {:.2}, p {:.6})",
            self.population,
            best.n,
            best.expected_value,
            best.probability
        );

        OptimalDraw {
            n: best.n,
            probability: best.probability,
            expected_value: best.expected_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::ln_success_probability;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_scenario() {
        // N = 60, payout 1,000,000 per draw
        let policy = DrawPolicy::new(60, 1_000_000.0).unwrap();
        let best = policy.optimize();

        assert_eq!(best.n, 8);
        assert_relative_eq!(best.probability, 0.614209393519, epsilon = 1e-10);
        assert_relative_eq!(best.expected_value, 4_913_675.148148, epsilon = 1e-4);
    }

    #[test]
    fn test_sweep_covers_full_domain() {
        let policy = DrawPolicy::new(60, 1_000_000.0).unwrap();
        let outcomes = policy.sweep();

        assert_eq!(outcomes.len(), 60);
        assert_eq!(outcomes[0].n, 1);
        assert_eq!(outcomes[59].n, 60);
    }

    #[test]
    fn test_first_draw_is_certain() {
        let policy = DrawPolicy::new(60, 1_000_000.0).unwrap();
        let outcomes = policy.sweep();

        // p(1) = 1 exactly, so EV(1) is exactly the payout multiplier
        assert_relative_eq!(outcomes[0].probability, 1.0, epsilon = 1e-12);
        assert_relative_eq!(outcomes[0].expected_value, 1_000_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_optimum_dominates_every_candidate() {
        let policy = DrawPolicy::new(60, 1_000_000.0).unwrap();
        let best = policy.optimize();

        for outcome in policy.sweep() {
            assert!(best.expected_value >= outcome.expected_value);
        }
    }

    #[test]
    fn test_sweep_matches_closed_form() {
        // Incremental log sum against the ln_gamma closed form
        let policy = DrawPolicy::new(60, 1_000_000.0).unwrap();

        for outcome in policy.sweep() {
            let ln_p = ln_success_probability(60, outcome.n).unwrap();
            assert_relative_eq!(outcome.probability, ln_p.exp(), max_relative = 1e-10);
        }
    }

    #[test]
    fn test_population_of_one() {
        let policy = DrawPolicy::new(1, 250.0).unwrap();
        let best = policy.optimize();

        assert_eq!(best.n, 1);
        assert_relative_eq!(best.probability, 1.0, epsilon = 1e-12);
        assert_relative_eq!(best.expected_value, 250.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tie_selects_smallest_n() {
        // N = 2 ties exactly: EV(1) = M and EV(2) = (1/2) * 2 * M = M,
        // and both round-trip through log space to the same f64.
        let policy = DrawPolicy::new(2, 1_000_000.0).unwrap();
        let outcomes = policy.sweep();
        assert_eq!(outcomes[0].expected_value, outcomes[1].expected_value);

        let best = policy.optimize();
        assert_eq!(best.n, 1);
    }

    proptest::proptest! {
        #[test]
        fn prop_optimum_dominates(population in 1_u32..=200, payout in 1.0_f64..1e9) {
            let policy = DrawPolicy::new(population, payout).unwrap();
            let best = policy.optimize();

            for outcome in policy.sweep() {
                proptest::prop_assert!(best.expected_value >= outcome.expected_value);
            }
        }
    }

    #[test]
    fn test_rejects_zero_population() {
        let err = DrawPolicy::new(0, 1_000_000.0).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput { .. }));
    }

    #[test]
    fn test_rejects_bad_payout() {
        for payout in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = DrawPolicy::new(60, payout).unwrap_err();
            assert!(matches!(err, MathError::InvalidInput { .. }));
        }
    }
}
