//! Error types for temperature inversion.

use std::fmt;

use ck_core::CkError;
use thiserror::Error;

/// Why a Newton inversion stopped without converging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// Iteration cap reached.
    MaxIterations,
    /// `|c_v|` or `|c_p|` fell below `min_derivative` (e.g. all-zero Y).
    DegenerateDerivative,
    /// The guess or an iterate left the mechanism's valid temperature range.
    OutOfRange,
    /// A residual, derivative or iterate was NaN or infinite.
    NonFinite,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureReason::MaxIterations => "iteration limit reached",
            FailureReason::DegenerateDerivative => "degenerate heat capacity",
            FailureReason::OutOfRange => "temperature outside valid range",
            FailureReason::NonFinite => "non-finite iterate",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error(
        "Temperature inversion failed after {iterations} iterations ({reason}): \
         T = {temperature} K, residual = {residual}"
    )]
    TemperatureInversionFailed {
        /// Last iterate [K]
        temperature: f64,
        /// `f(T) − target` at the last iterate
        residual: f64,
        iterations: usize,
        reason: FailureReason,
    },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl SolverError {
    pub fn reason(&self) -> FailureReason {
        match self {
            SolverError::TemperatureInversionFailed { reason, .. } => *reason,
        }
    }
}

impl From<SolverError> for CkError {
    fn from(e: SolverError) -> Self {
        CkError::InvalidArg {
            what: e.to_string(),
        }
    }
}
