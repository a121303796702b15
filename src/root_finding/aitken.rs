//! Aitken Δ² acceleration over fixed-point iteration.
//!
//! Consumes the raw sequence a plain fixed-point solver would produce and
//! extrapolates each triple of consecutive iterates with the Δ² transform.
//! In the default [`AitkenMode::Reseed`] the accelerated value also becomes
//! the next iterate (Steffensen-style re-use), which is what makes this
//! solver faster than plain fixed point on the same `g` rather than a mere
//! post-hoc transform.

use tracing::warn;

use super::config::{impl_common_cfg, CommonCfg};
use super::errors::AitkenError;
use super::gate::ConvergenceGate;
use super::result::{AitkenStep, RootResult};

/// Second differences smaller than this in magnitude mean the three points
/// are nearly collinear (already converged or non-accelerable); the solver
/// falls back to the unaccelerated value instead of dividing.
const DENOMINATOR_FLOOR: f64 = 1e-14;

/// Magnitudes below this are treated as zero when forming the relative
/// error, to avoid dividing by a vanishing accelerated value.
const RELATIVE_SCALE_FLOOR: f64 = 1e-14;

/// How the accelerated value feeds back into the iteration.
///
/// - [`AitkenMode::Reseed`] : the accelerated value becomes the next
///   iterate *and* re-seeds the raw window, so every subsequent triple is
///   built from consecutive iterates of the freshest estimate. Fastest;
///   the primary contract.
/// - [`AitkenMode::RawSequence`] : the raw fixed-point sequence keeps
///   running unchanged and acceleration stays a per-triple post-process.
///   Converges at the raw sequence's pace; kept for parity with legacy
///   traces produced this way.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum AitkenMode {
    #[default]
    Reseed,
    RawSequence,
}

/// Aitken configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tol` and `max_iterations`.
/// - `mode`   : [`AitkenMode`] feedback policy (default: `Reseed`).
#[derive(Debug, Copy, Clone, Default)]
pub struct AitkenCfg {
    common: CommonCfg,
    mode: AitkenMode,
}

impl AitkenCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            mode: AitkenMode::Reseed,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: AitkenMode) -> Self {
        self.mode = mode;
        self
    }
}
impl_common_cfg!(AitkenCfg);

/// Sliding window of up to three consecutive raw fixed-point iterates.
#[derive(Debug, Copy, Clone)]
struct TripleBuffer {
    w: [f64; 3],
    len: usize,
}

impl TripleBuffer {
    fn seeded(x0: f64) -> Self {
        Self {
            w: [x0, 0.0, 0.0],
            len: 1,
        }
    }

    /// Most recent value in the window. The window is never empty.
    fn last(&self) -> f64 {
        self.w[self.len - 1]
    }

    fn push(&mut self, v: f64) {
        if self.len < 3 {
            self.w[self.len] = v;
            self.len += 1;
        } else {
            self.w = [self.w[1], self.w[2], v];
        }
    }

    fn triple(&self) -> Option<[f64; 3]> {
        (self.len == 3).then_some(self.w)
    }

    /// Restart the raw sequence from a new seed.
    fn reseed(&mut self, v: f64) {
        *self = Self::seeded(v);
    }
}

/// Δ² extrapolation of one triple of consecutive iterates, with the
/// degenerate-denominator and non-finite fallbacks to the plain
/// fixed-point value `w2`.
fn delta_squared(w: [f64; 3], iteration: usize) -> f64 {
    let [w0, w1, w2] = w;
    let denominator = w2 - 2.0 * w1 + w0;

    if denominator.abs() <= DENOMINATOR_FLOOR {
        warn!(iteration, denominator, "near-singular second difference; using unaccelerated value");
        return w2;
    }

    let accelerated = w0 - (w1 - w0).powi(2) / denominator;
    if accelerated.is_finite() {
        accelerated
    } else {
        warn!(iteration, accelerated, "non-finite accelerated value; using unaccelerated value");
        w2
    }
}

/// Solves `x = g(x)` with
/// [Aitken's Δ² acceleration](https://en.wikipedia.org/wiki/Aitken%27s_delta-squared_process)
/// applied on top of fixed-point iteration.
///
/// Needs three consecutive raw iterates before it can extrapolate, so the
/// first steps behave as plain fixed point and record partial rows
/// (optional fields `None`). Once a triple `(w0, w1, w2)` is available each
/// iteration computes
///
/// ```text
/// x_accelerated = w0 - (w1 - w0)² / (w2 - 2·w1 + w0)
/// ```
///
/// falling back to `w2` when the denominator is near-singular or the
/// quotient non-finite. A single degenerate triple does not invalidate
/// the overall sequence, so unlike Newton's derivative guard this is a
/// graceful degradation, not a hard failure.
///
/// # Arguments
/// - `g`   : iteration function
/// - `x0`  : finite initial guess
/// - `cfg` : [`AitkenCfg`] (tolerance, iteration cap, feedback mode)
///
/// # Returns
/// [`RootResult<AitkenStep>`] with one [`AitkenStep`] per completed
/// iteration; the richer dual trace carries both the raw step and the
/// accelerated state. Converges when `|x_accelerated - x| < tol`
/// (`root = x_accelerated`), or on the secondary un-accelerated distance
/// `|x_new - previous raw| < tol` (`root = x_new`), mirroring the
/// dual-criterion policy of the other solvers. `function_value` is
/// `|root - g(root)|`.
///
/// # Errors
/// - [`AitkenError::InvalidGuess`] : `x0` non-finite
///
/// A constant `g` converges on the first iteration through the secondary
/// criterion; a diverging or NaN-producing `g` exhausts the budget and
/// returns `converged = false` with a full-length trace, never a panic.
pub fn aitken<G>(
    mut g: G,
    x0: f64,
    cfg: AitkenCfg,
) -> Result<RootResult<AitkenStep>, AitkenError>
where
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(AitkenError::InvalidGuess { x0 });
    }

    let gate = ConvergenceGate::new(cfg.common.tol());
    let max_iterations = cfg.common.max_iterations();
    let mode = cfg.mode;

    let mut trace = Vec::with_capacity(max_iterations.min(64));
    let mut window = TripleBuffer::seeded(x0);
    let mut x = x0;
    let mut error = f64::INFINITY;

    for iteration in 1..=max_iterations {
        let x_new = g(x);
        let previous_raw = window.last();
        let raw_step = (x_new - previous_raw).abs();
        window.push(x_new);

        if let Some(w) = window.triple() {
            let accelerated = delta_squared(w, iteration);
            let error_abs = (accelerated - x).abs();
            let error_rel = if accelerated.abs() > RELATIVE_SCALE_FLOOR {
                error_abs / accelerated.abs()
            } else {
                error_abs
            };
            error = error_abs;

            trace.push(AitkenStep {
                iteration,
                x,
                g_x: x_new,
                triple: Some(w),
                accelerated: Some(accelerated),
                error_abs: Some(error_abs),
                error_rel: Some(error_rel),
            });

            if gate.distance(error_abs) {
                let residual = (accelerated - g(accelerated)).abs();
                return Ok(RootResult {
                    root: accelerated,
                    iterations: iteration,
                    converged: true,
                    error: error_abs,
                    function_value: residual,
                    iteration_data: trace,
                });
            }

            if mode == AitkenMode::Reseed {
                // the raw sequence restarts from the accelerated value, so
                // the next triple is again three consecutive iterates
                window.reseed(accelerated);
                x = accelerated;
                continue;
            }
            x = x_new;
        } else {
            // not enough points to extrapolate; plain fixed-point step
            trace.push(AitkenStep {
                iteration,
                x,
                g_x: x_new,
                triple: None,
                accelerated: None,
                error_abs: None,
                error_rel: None,
            });
            error = raw_step;
            x = x_new;
        }

        // secondary criterion on the raw sequence
        if gate.distance(raw_step) {
            let residual = (x_new - g(x_new)).abs();
            return Ok(RootResult {
                root: x_new,
                iterations: iteration,
                converged: true,
                error: raw_step,
                function_value: residual,
                iteration_data: trace,
            });
        }
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
