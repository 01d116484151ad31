//! # Ordex Math
//!
//! Expected-value analytics for ordered uniform draws.
//!
//! This crate answers one question: if you make `n` independent uniform draws
//! from a population of `N` outcomes, and a draw sequence pays out only when
//! all `n` results are distinct and land in one specific order, how many draws
//! should you make to maximize the expected payout?
//!
//! This crate provides:
//!
//! - **Permutation**: Log-space permutation counts, `ln P(N, n)`
//! - **Optimizer**: The EV sweep over all candidate draw counts and its argmax
//!
//! ## Design Philosophy
//!
//! - **Numerical Stability**: All multiplicative chains run in log space;
//!   `P(60, 60) = 60!` never exists as a finite-width integer
//! - **Pure**: Deterministic functions of the policy parameters, no state
//!
//! ## Example
//!
//! ```rust
//! use ordex_math::optimizer::DrawPolicy;
//!
//! let policy = DrawPolicy::new(60, 1_000_000.0).unwrap();
//! let best = policy.optimize();
//!
//! assert_eq!(best.n, 8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod optimizer;
pub mod permutation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::optimizer::{DrawOutcome, DrawPolicy, OptimalDraw};
    pub use crate::permutation::{ln_perm, ln_success_probability};
}

pub use error::{MathError, MathResult};
