//! Defines [`RootResult`] and the per-method iteration records returned by
//! all root-finding solvers.
//!
//! A solver fills one [`RootResult`] per invocation and hands it to the
//! caller whole; nothing is retained between calls. The trace in
//! `iteration_data` is append-only and insertion-ordered (one record per
//! completed iteration, never reordered or deduplicated) so a display
//! layer can render it directly as a table.

/// Outcome of one solver invocation, generic over the method's iteration
/// record type.
///
/// Fields:
/// - `root`           : best estimate at termination
/// - `iterations`     : completed iterations; equals `iteration_data.len()`
/// - `converged`      : whether a stopping criterion fired before the cap
/// - `error`          : last computed convergence metric (method-specific:
///   half-interval width for bisection, `|x_new - x|` for Newton and fixed
///   point, `|x_accelerated - x|` for Aitken)
/// - `function_value` : `f(root)`, or `|root - g(root)|` for the
///   fixed-point family where the original `f` is unavailable
/// - `iteration_data` : full per-iteration trace
///
/// When `converged` is true, `root` is exactly the value that satisfied
/// the criterion, never a later, unchecked iterate.
#[derive(Debug, Clone)]
pub struct RootResult<S> {
    pub root: f64,
    pub iterations: usize,
    pub converged: bool,
    pub error: f64,
    pub function_value: f64,
    pub iteration_data: Vec<S>,
}

impl<S> RootResult<S> {
    /// Record of the final completed iteration, if any ran.
    pub fn last_step(&self) -> Option<&S> {
        self.iteration_data.last()
    }
}

/// One bisection step. `error` is the half-width `(b - a) / 2` of the
/// bracket *before* it shrinks this step, which makes it a rigorous upper
/// bound on the distance from `c` to the true root.
#[derive(Debug, Copy, Clone)]
pub struct BisectionStep {
    pub iteration: usize,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub f_c: f64,
    pub error: f64,
}

/// One Newton-Raphson step: `x_next = x - f_x / df_x`, `error = |x_next - x|`.
#[derive(Debug, Copy, Clone)]
pub struct NewtonStep {
    pub iteration: usize,
    pub x: f64,
    pub f_x: f64,
    pub df_x: f64,
    pub x_next: f64,
    pub error: f64,
}

/// One fixed-point step: `g_x = g(x)`, `error = |g_x - x|`.
#[derive(Debug, Copy, Clone)]
pub struct FixedPointStep {
    pub iteration: usize,
    pub x: f64,
    pub g_x: f64,
    pub error: f64,
}

/// One Aitken Δ² step.
///
/// - `x`           : iterate entering the step
/// - `g_x`         : new raw fixed-point value `g(x)`
/// - `triple`      : the three consecutive raw iterates fed to the Δ²
///   formula, once available
/// - `accelerated` : extrapolated value `w0 - (w1 - w0)² / (w2 - 2·w1 + w0)`
/// - `error_abs`   : `|accelerated - x|`
/// - `error_rel`   : `error_abs / |accelerated|`, falling back to
///   `error_abs` when the accelerated value is itself near zero
///
/// The optional fields are `None` exactly on the iterations where fewer
/// than three consecutive raw iterates exist; those steps behave as plain
/// fixed point.
#[derive(Debug, Copy, Clone)]
pub struct AitkenStep {
    pub iteration: usize,
    pub x: f64,
    pub g_x: f64,
    pub triple: Option<[f64; 3]>,
    pub accelerated: Option<f64>,
    pub error_abs: Option<f64>,
    pub error_rel: Option<f64>,
}
