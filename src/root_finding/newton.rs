//! Newton-Raphson method.

use super::config::{impl_common_cfg, CommonCfg};
use super::errors::NewtonError;
use super::gate::ConvergenceGate;
use super::result::{NewtonStep, RootResult};

/// Derivatives smaller than this in magnitude make the Newton step
/// numerically meaningless; the solver fails hard instead of continuing.
const DERIVATIVE_FLOOR: f64 = 1e-12;

/// Newton-Raphson configuration.
#[derive(Debug, Copy, Clone, Default)]
pub struct NewtonCfg {
    common: CommonCfg,
}

impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
        }
    }
}
impl_common_cfg!(NewtonCfg);

/// Finds a root of `func` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method).
///
/// The derivative is supplied by the caller. There is deliberately no
/// silent finite-difference fallback inside this solver: an approximated
/// derivative hides ill-conditioning from the caller, so a caller without
/// an analytic derivative must build and pass its own centered-difference
/// closure.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : its derivative
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (tolerance, iteration cap)
///
/// # Returns
/// [`RootResult<NewtonStep>`] with one [`NewtonStep`] per completed
/// iteration. Convergence is judged on the iterate distance
/// `|x_next - x| < tol`, reporting `root = x_next` and
/// `function_value = f(x_next)`. Exhausting the cap yields
/// `converged = false` with the last iterate, never an error.
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]    : `x0` non-finite
/// - [`NewtonError::SmallDerivative`] : `|f'(x)| < 1e-12` at any iterate,
///   raised before the offending step is taken
///
/// # Notes
/// Quadratic convergence near a simple root means the iterate-distance and
/// function-value criteria tend to agree within one iteration of each
/// other; convergence is local only and depends on the guess. For
/// guaranteed convergence, prefer [`bisection`](super::bisection::bisection).
pub fn newton_raphson<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootResult<NewtonStep>, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    let gate = ConvergenceGate::new(cfg.common.tol());
    let max_iterations = cfg.common.max_iterations();

    let mut trace = Vec::with_capacity(max_iterations.min(64));
    let mut x = x0;
    let mut error = f64::INFINITY;

    for iteration in 1..=max_iterations {
        let fx = func(x);
        let dfx = dfunc(x);

        if dfx.abs() < DERIVATIVE_FLOOR {
            return Err(NewtonError::SmallDerivative { x, dfx });
        }

        let x_next = x - fx / dfx;
        error = (x_next - x).abs();

        trace.push(NewtonStep {
            iteration,
            x,
            f_x: fx,
            df_x: dfx,
            x_next,
            error,
        });

        if gate.distance(error) {
            let f_root = func(x_next);
            return Ok(RootResult {
                root: x_next,
                iterations: iteration,
                converged: true,
                error,
                function_value: f_root,
                iteration_data: trace,
            });
        }

        x = x_next;
    }

    let f_root = func(x);
    Ok(RootResult {
        root: x,
        iterations: max_iterations,
        converged: false,
        error,
        function_value: f_root,
        iteration_data: trace,
    })
}
