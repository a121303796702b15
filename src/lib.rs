//! # itera
//!
//! Iterative root-finding for scalar equations, built for callers that need
//! the *whole story* of a solve, not just the answer: every solver returns a
//! [`root_finding::result::RootResult`] carrying the final estimate together
//! with an ordered per-iteration trace suitable for tabular display.
//!
//! Methods:
//! - [`root_finding::bisection`]   : bracket-based, guaranteed convergence
//! - [`root_finding::newton`]      : Newton-Raphson, locally quadratic
//! - [`root_finding::fixed_point`] : plain x = g(x) iteration
//! - [`root_finding::aitken`]      : Δ² acceleration on top of fixed point
//!
//! Functions are supplied as plain `FnMut(f64) -> f64` closures; the crate
//! never parses expressions, differentiates, or renders anything.

pub mod root_finding;
