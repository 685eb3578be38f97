//! Error types for the kernel facade.

use ck_core::CkError;
use ck_mechanism::MechanismError;
use ck_solver::SolverError;
use ck_thermo::ThermoError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    #[error("Malformed mechanism: {0}")]
    MalformedMechanism(#[from] MechanismError),

    #[error(transparent)]
    TemperatureInversionFailed(#[from] SolverError),

    #[error("Invalid composition: {0}")]
    InvalidComposition(#[from] ThermoError),

    #[error("Expected {expected} mass fractions, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type KernelResult<T> = Result<T, KernelError>;

impl From<KernelError> for CkError {
    fn from(e: KernelError) -> Self {
        match e {
            KernelError::MalformedMechanism(err) => err.into(),
            KernelError::TemperatureInversionFailed(err) => err.into(),
            KernelError::InvalidComposition(err) => err.into(),
            KernelError::LengthMismatch { expected, actual } => CkError::IndexOob {
                what: "mass fractions",
                index: actual,
                len: expected,
            },
            KernelError::Config(what) => CkError::InvalidArg { what },
        }
    }
}
