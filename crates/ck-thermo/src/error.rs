//! Equation-of-state errors.

use ck_core::CkError;
use thiserror::Error;

/// Result type for equation-of-state operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// A species molar mass is not strictly positive (corrupted tables).
    #[error("Invalid composition: species {species} has molar mass {molar_mass} kg/kmol")]
    InvalidComposition { species: usize, molar_mass: f64 },
}

impl From<ThermoError> for CkError {
    fn from(err: ThermoError) -> Self {
        CkError::InvalidArg {
            what: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ThermoError::InvalidComposition {
            species: 3,
            molar_mass: -1.0,
        };
        assert!(err.to_string().contains("species 3"));
    }

    #[test]
    fn error_to_ck_error() {
        let err: CkError = ThermoError::InvalidComposition {
            species: 0,
            molar_mass: 0.0,
        }
        .into();
        assert!(matches!(err, CkError::InvalidArg { .. }));
    }
}
