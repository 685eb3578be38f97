//! Mechanism construction and validation errors.

use ck_core::CkError;
use thiserror::Error;

/// Result type for mechanism operations.
pub type MechanismResult<T> = Result<T, MechanismError>;

/// A species or reaction table that is internally inconsistent.
///
/// Every variant is detected once, when a description is compiled into
/// `ThermoData`; a kernel is never produced from a malformed mechanism.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MechanismError {
    #[error("Mechanism '{name}' has no species")]
    NoSpecies { name: String },

    #[error("Species {index} has an empty name")]
    EmptySpeciesName { index: usize },

    #[error("Species '{name}' is defined more than once")]
    DuplicateSpecies { name: String },

    #[error("Species '{species}' has non-positive molar mass {value} kg/kmol")]
    NonPositiveMolarMass { species: String, value: f64 },

    #[error(
        "Species '{species}' has invalid temperature ranges ({t_low} K, {t_mid} K, {t_high} K)"
    )]
    InvalidTemperatureRange {
        species: String,
        t_low: f64,
        t_mid: f64,
        t_high: f64,
    },

    #[error("Non-finite coefficient in {what}")]
    NonFiniteCoefficient { what: String },

    #[error("Reaction '{reaction}' references unknown species '{species}'")]
    DanglingSpeciesRef { reaction: String, species: String },

    #[error("Reaction '{reaction}' has no {side}")]
    EmptyReactionSide {
        reaction: String,
        side: &'static str,
    },

    #[error("Reaction '{reaction}' has invalid stoichiometric coefficient {value} for '{species}'")]
    InvalidStoichCoefficient {
        reaction: String,
        species: String,
        value: f64,
    },

    #[error("Reaction '{reaction}' has invalid rate parameter: {what}")]
    InvalidRateParameter {
        reaction: String,
        what: &'static str,
    },

    #[error("Reaction '{reaction}' does not conserve mass (imbalance {imbalance} kg/kmol)")]
    MassImbalance { reaction: String, imbalance: f64 },

    #[error("Mechanism '{name}' has no temperature range common to all species")]
    EmptyTemperatureRange { name: String },
}

impl From<MechanismError> for CkError {
    fn from(err: MechanismError) -> Self {
        CkError::Invariant {
            what: format!("Malformed mechanism: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MechanismError::DanglingSpeciesRef {
            reaction: "H + X <=> HX".into(),
            species: "X".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unknown species 'X'"));

        let err = MechanismError::NonPositiveMolarMass {
            species: "H2".into(),
            value: 0.0,
        };
        assert!(err.to_string().contains("H2"));
    }

    #[test]
    fn error_to_ck_error() {
        let err = MechanismError::NoSpecies {
            name: "empty".into(),
        };
        let ck: CkError = err.into();
        assert!(matches!(ck, CkError::Invariant { .. }));
    }
}
