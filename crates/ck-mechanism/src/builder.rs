//! Incremental mechanism builder.

use ck_core::{ReactionId, SpeciesId};

use crate::description::{MechanismDescription, SpeciesDescription};
use crate::error::MechanismResult;
use crate::nasa7::Nasa7;
use crate::reaction::ReactionDescription;
use crate::thermo_data::ThermoData;

/// Builder for assembling a mechanism description in code.
///
/// Use `add_species` and `add_reaction` to build up the tables, then call
/// `finish()` for the description or `build()` to validate and freeze it into
/// `ThermoData`.
#[derive(Debug, Default)]
pub struct MechanismBuilder {
    name: String,
    species: Vec<SpeciesDescription>,
    reactions: Vec<ReactionDescription>,
}

impl MechanismBuilder {
    /// Create a new empty builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a species and return its index.
    pub fn add_species(
        &mut self,
        name: impl Into<String>,
        molar_mass: f64,
        thermo: Nasa7,
    ) -> SpeciesId {
        let id = SpeciesId::from_index(self.species.len() as u32);
        self.species.push(SpeciesDescription {
            name: name.into(),
            molar_mass,
            thermo,
        });
        id
    }

    /// Add a reaction and return its index.
    pub fn add_reaction(&mut self, reaction: ReactionDescription) -> ReactionId {
        let id = ReactionId::from_index(self.reactions.len() as u32);
        self.reactions.push(reaction);
        id
    }

    pub fn num_species(&self) -> usize {
        self.species.len()
    }

    pub fn num_reactions(&self) -> usize {
        self.reactions.len()
    }

    /// Return the assembled (unvalidated) description.
    pub fn finish(self) -> MechanismDescription {
        MechanismDescription {
            name: self.name,
            species: self.species,
            reactions: self.reactions,
        }
    }

    /// Validate and compile, returning immutable `ThermoData`.
    pub fn build(self) -> MechanismResult<ThermoData> {
        self.finish().compile()
    }
}
