// common helpers
pub mod errors;
pub mod result;
pub(crate) mod config;
pub(crate) mod gate;

// algorithms
pub mod bisection;
pub mod newton;
pub mod fixed_point;
pub mod aitken;
