//! Bisection method.

use super::config::{impl_common_cfg, CommonCfg};
use super::errors::BisectionError;
use super::gate::ConvergenceGate;
use super::result::{BisectionStep, RootResult};

/// Bisection configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tol` and `max_iterations`.
///
/// # Construction
/// - Use [`BisectionCfg::new`] then the optional `set_*` setters; setters
///   validate eagerly and return [`SolverError`](super::errors::SolverError)
///   on bad input.
#[derive(Debug, Copy, Clone, Default)]
pub struct BisectionCfg {
    common: CommonCfg,
}

impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
        }
    }
}
impl_common_cfg!(BisectionCfg);

/// Midpoint of [a, b], written to avoid overflow on large endpoints.
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}

/// Finds a root of `func` on `[a, b]` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Assumes `func` is continuous on `[a, b]` with a sign change across the
/// interval, which guarantees a root inside it. The bracket never grows, so
/// the recorded `error` (half-width) is a rigorous upper bound on the
/// distance to the true root at every step, not merely an estimate. This
/// is the method to prefer when correctness matters more than speed.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `a`    : left endpoint, finite, `a < b`
/// - `b`    : right endpoint, finite
/// - `cfg`  : [`BisectionCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`RootResult<BisectionStep>`] with one [`BisectionStep`] per completed
/// iteration. On exhausting `max_iterations` the result carries
/// `converged = false` and the current midpoint; no error is raised for
/// ordinary non-convergence.
///
/// # Errors
/// - [`BisectionError::InvalidInterval`] : `a` or `b` non-finite, or `a >= b`
/// - [`BisectionError::NoSignChange`]    : `func(a) * func(b) > 0`
///
/// Both precondition checks run once, before any iteration.
///
/// # Stopping rules
/// Per iteration, in canonical order:
/// 1. `|f(c)| < tol`            → converged, `root = c`
/// 2. shrink the bracket, then `(b - a)/2 < tol` → converged, `root = c`
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg,
) -> Result<RootResult<BisectionStep>, BisectionError>
where
    F: FnMut(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidInterval { a, b });
    }

    let gate = ConvergenceGate::new(cfg.common.tol());
    let max_iterations = cfg.common.max_iterations();

    let mut fa = func(a);
    let fb = func(b);
    if fa * fb > 0.0 {
        return Err(BisectionError::NoSignChange { a, b });
    }

    let mut trace = Vec::with_capacity(max_iterations.min(64));

    // get overwritten on the first iteration; max_iterations >= 1
    let mut c = a;
    let mut fc = fa;

    for iteration in 1..=max_iterations {
        c = midpoint(a, b);
        fc = func(c);
        let half_width = (b - a) * 0.5;

        trace.push(BisectionStep {
            iteration,
            a,
            b,
            c,
            f_c: fc,
            error: half_width,
        });

        if gate.residual(fc) {
            return Ok(RootResult {
                root: c,
                iterations: iteration,
                converged: true,
                error: half_width,
                function_value: fc,
                iteration_data: trace,
            });
        }

        // shrink the bracket toward the sign change
        if fa * fc < 0.0 {
            b = c;
        } else {
            a = c;
            fa = fc;
        }

        let shrunk_half_width = (b - a) * 0.5;
        if gate.distance(shrunk_half_width) {
            return Ok(RootResult {
                root: c,
                iterations: iteration,
                converged: true,
                error: shrunk_half_width,
                function_value: fc,
                iteration_data: trace,
            });
        }
    }

    Ok(RootResult {
        root: c,
        iterations: max_iterations,
        converged: false,
        error: (b - a) * 0.5,
        function_value: fc,
        iteration_data: trace,
    })
}
