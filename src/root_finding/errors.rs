//! Root-finding error types.
//!
//! ┌ [`SolverError`]     : invalid global parameters
//! │   ├ invalid tolerance
//! │   └ invalid iteration cap
//! │
//! ├ [`BisectionError`]  : bracket precondition failures
//! ├ [`NewtonError`]     : derivative degeneracy
//! └ [`FixedPointError`] / [`AitkenError`] : bad initial guess
//!
//! Ordinary non-convergence is *not* an error anywhere in this module: a
//! solver that exhausts its iteration budget still returns a
//! [`RootResult`](super::result::RootResult) with `converged = false`.

use thiserror::Error;

/// Configuration errors shared by all solvers.
///
/// Raised by the config setters, before any iteration runs.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iterations: must be >= 1. got {got}")]
    InvalidMaxIterations { got: usize },
}

/// Bisection precondition errors.
///
/// Both are hard failures checked once, before the first iteration.
#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("invalid interval: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidInterval { a: f64, b: f64 },

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange { a: f64, b: f64 },
}

/// Newton-Raphson errors.
#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("derivative too small at x={x}: f'(x)={dfx}; method may diverge")]
    SmallDerivative { x: f64, dfx: f64 },
}

/// Fixed-point iteration errors.
#[derive(Debug, Error)]
pub enum FixedPointError {
    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },
}

/// Aitken Δ² acceleration errors.
///
/// A degenerate second difference is *not* represented here: the solver
/// falls back to the unaccelerated iterate instead of failing.
#[derive(Debug, Error)]
pub enum AitkenError {
    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },
}
