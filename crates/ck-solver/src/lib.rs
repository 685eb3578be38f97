//! ck-solver: temperature inversion for chemkern.
//!
//! Given a target specific internal energy or enthalpy and mass fractions,
//! `solve_temperature` runs a scalar Newton iteration on
//! `Σ Y_i f_i(T) − target = 0` with `c_v` or `c_p` as the derivative.
//!
//! The iteration is unguarded by default, matching the usual CFD kernel
//! behaviour; `NewtonConfig::bracket_fallback` adds a bisection safeguard.

pub mod error;
pub mod newton;

pub use error::{FailureReason, SolverError, SolverResult};
pub use newton::{NewtonConfig, TemperatureSolution, solve_temperature};
