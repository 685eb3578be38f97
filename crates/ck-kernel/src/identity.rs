//! Model identity reported to host codes.

use ck_mechanism::ThermoData;
use serde::Serialize;

/// Name, species count and species ordering of a compiled mechanism.
///
/// Host codes use this to lay out their per-cell mass-fraction arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KernelIdentity {
    model_name: String,
    species_names: Vec<String>,
}

impl KernelIdentity {
    pub fn from_thermo(thermo: &ThermoData) -> Self {
        Self {
            model_name: thermo.name().to_string(),
            species_names: thermo.species_names().to_vec(),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn num_species(&self) -> usize {
        self.species_names.len()
    }

    pub fn species_names(&self) -> &[String] {
        &self.species_names
    }
}
