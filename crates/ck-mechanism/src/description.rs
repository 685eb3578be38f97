//! The precompiled mechanism artifact handed to the kernel.

use crate::error::MechanismResult;
use crate::nasa7::Nasa7;
use crate::reaction::ReactionDescription;
use crate::thermo_data::ThermoData;

/// One species row of the mechanism.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesDescription {
    pub name: String,
    /// Molar mass [kg/kmol]
    pub molar_mass: f64,
    pub thermo: Nasa7,
}

/// Species table plus reaction table, referenced by name.
///
/// This is what an external code generator emits. It is not trusted:
/// [`MechanismDescription::compile`] validates it and resolves every name to
/// an index before anything evaluates it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MechanismDescription {
    pub name: String,
    pub species: Vec<SpeciesDescription>,
    pub reactions: Vec<ReactionDescription>,
}

impl MechanismDescription {
    /// Validate and freeze into immutable, index-resolved tables.
    pub fn compile(&self) -> MechanismResult<ThermoData> {
        ThermoData::compile(self)
    }

    pub fn species_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.species.iter().map(|s| s.name.as_str())
    }
}
