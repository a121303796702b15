//! Shared configuration for root-finding solvers.
//!
//! Provides [`CommonCfg`] with the tolerance and iteration cap every solver
//! takes, plus the [`impl_common_cfg`] macro that generates validated
//! builder setters on each solver's own config struct.
//!
//! [`CommonCfg`] — universal fields
//! ├ `tol`            : convergence tolerance, shared by both stopping rules
//! └ `max_iterations` : iteration cap
//!
//! Defaults match the original call contract: `tol = 1e-6`,
//! `max_iterations = 100`.

pub const DEFAULT_TOL: f64 = 1e-6;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    tol: f64,
    max_iterations: usize,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tol: DEFAULT_TOL,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    // getters
    pub fn tol(&self) -> f64 {
        self.tol
    }
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    // setters (internal; validation lives in the macro-generated setters)
    pub(crate) fn with_tol(&mut self, v: f64) {
        self.tol = v;
    }
    pub(crate) fn with_max_iterations(&mut self, v: usize) {
        self.max_iterations = v;
    }
}

impl Default for CommonCfg {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::root_finding::errors::SolverError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::SolverError::InvalidTolerance { got: v },
                    );
                }
                self.common.with_tol(v);
                Ok(self)
            }

            pub fn set_max_iterations(
                mut self,
                v: usize,
            ) -> Result<Self, $crate::root_finding::errors::SolverError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::SolverError::InvalidMaxIterations { got: v },
                    );
                }
                self.common.with_max_iterations(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
