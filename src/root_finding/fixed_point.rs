//! Fixed-point iteration.

use tracing::warn;

use super::config::{impl_common_cfg, CommonCfg};
use super::errors::FixedPointError;
use super::gate::ConvergenceGate;
use super::result::{FixedPointStep, RootResult};

/// Step-error growth factor past which an iteration is flagged as likely
/// divergent.
const DIVERGENCE_GROWTH: f64 = 10.0;

/// Fixed-point configuration.
#[derive(Debug, Copy, Clone, Default)]
pub struct FixedPointCfg {
    common: CommonCfg,
}

impl FixedPointCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
        }
    }
}
impl_common_cfg!(FixedPointCfg);

/// Solves `x = g(x)` by
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration).
///
/// There is no precondition on `g`: convergence is entirely the caller's
/// responsibility (a Banach-style contraction is assumed, not verified).
/// A diverging or NaN-producing `g` runs out the iteration budget and
/// comes back as `converged = false`, never as an error or a panic.
///
/// # Arguments
/// - `g`   : iteration function
/// - `x0`  : finite initial guess
/// - `cfg` : [`FixedPointCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`RootResult<FixedPointStep>`] with one [`FixedPointStep`] per completed
/// iteration. Converges when `|x_new - x| < tol`, reporting `root = x_new`
/// and `function_value = |x_new - g(x_new)|` (the distance from being a
/// fixed point, since the original `f` is unavailable on this path).
///
/// # Errors
/// - [`FixedPointError::InvalidGuess`] : `x0` non-finite
///
/// # Notes
/// When the step error grows by more than 10x between consecutive
/// iterations a `tracing` warning is emitted; iteration continues, since a
/// transiently growing error does not prove divergence.
pub fn fixed_point<G>(
    mut g: G,
    x0: f64,
    cfg: FixedPointCfg,
) -> Result<RootResult<FixedPointStep>, FixedPointError>
where
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(FixedPointError::InvalidGuess { x0 });
    }

    let gate = ConvergenceGate::new(cfg.common.tol());
    let max_iterations = cfg.common.max_iterations();

    let mut trace = Vec::with_capacity(max_iterations.min(64));
    let mut x = x0;
    let mut error = f64::INFINITY;

    for iteration in 1..=max_iterations {
        let x_new = g(x);
        let step = (x_new - x).abs();

        if iteration > 1 && step > error * DIVERGENCE_GROWTH {
            warn!(iteration, x, x_new, "fixed-point step error grew sharply; possible divergence");
        }
        error = step;

        trace.push(FixedPointStep {
            iteration,
            x,
            g_x: x_new,
            error,
        });

        if gate.distance(error) {
            let residual = (x_new - g(x_new)).abs();
            return Ok(RootResult {
                root: x_new,
                iterations: iteration,
                converged: true,
                error,
                function_value: residual,
                iteration_data: trace,
            });
        }

        x = x_new;
    }

    let residual = (x - g(x)).abs();
    Ok(RootResult {
        root: x,
        iterations: max_iterations,
        converged: false,
        error,
        function_value: residual,
        iteration_data: trace,
    })
}
