//! Shared stopping-rule policy for root-finding solvers.
//!
//! Solvers draw from the same pair of predicates: a function-value
//! criterion and a distance criterion over the method's own metric
//! (interval half-width, iterate-to-iterate step, or accelerated step).
//! Where a solver applies both, function value is checked first; keeping
//! the policy in one place keeps iteration counts comparable when methods
//! are run side by side on the same problem.

/// Stateless convergence predicate pair over a single tolerance.
#[derive(Debug, Copy, Clone)]
pub(crate) struct ConvergenceGate {
    tol: f64,
}

impl ConvergenceGate {
    pub fn new(tol: f64) -> Self {
        Self { tol }
    }

    /// Function-value criterion: `|f(x)| < tol`.
    #[inline]
    pub fn residual(&self, fx: f64) -> bool {
        fx.abs() < self.tol
    }

    /// Distance criterion: `d < tol` for a non-negative metric `d`.
    ///
    /// A NaN metric never satisfies the gate, so a solver fed a
    /// NaN-producing function runs out its budget instead of stopping on a
    /// meaningless comparison.
    #[inline]
    pub fn distance(&self, d: f64) -> bool {
        d < self.tol
    }
}
