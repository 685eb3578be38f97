//! Mechanism validation logic.

use std::collections::HashMap;

use crate::description::MechanismDescription;
use crate::error::{MechanismError, MechanismResult};
use crate::reaction::{Arrhenius, ReactionDescription};

/// Validate the species table and return the name -> index lookup.
pub(crate) fn validate_species(desc: &MechanismDescription) -> MechanismResult<HashMap<&str, usize>> {
    if desc.species.is_empty() {
        return Err(MechanismError::NoSpecies {
            name: desc.name.clone(),
        });
    }

    let mut index = HashMap::with_capacity(desc.species.len());
    for (i, sp) in desc.species.iter().enumerate() {
        if sp.name.trim().is_empty() {
            return Err(MechanismError::EmptySpeciesName { index: i });
        }
        if index.insert(sp.name.as_str(), i).is_some() {
            return Err(MechanismError::DuplicateSpecies {
                name: sp.name.clone(),
            });
        }

        // Molar mass must be strictly positive (NaN fails this too)
        if !(sp.molar_mass.is_finite() && sp.molar_mass > 0.0) {
            return Err(MechanismError::NonPositiveMolarMass {
                species: sp.name.clone(),
                value: sp.molar_mass,
            });
        }

        if !sp.thermo.is_finite() {
            return Err(MechanismError::NonFiniteCoefficient {
                what: format!("thermodynamic polynomial of '{}'", sp.name),
            });
        }
        let p = &sp.thermo;
        if !(p.t_low > 0.0 && p.t_low < p.t_mid && p.t_mid < p.t_high) {
            return Err(MechanismError::InvalidTemperatureRange {
                species: sp.name.clone(),
                t_low: p.t_low,
                t_mid: p.t_mid,
                t_high: p.t_high,
            });
        }
    }

    Ok(index)
}

/// Resolve one side of a reaction to `(species index, coefficient)` pairs.
pub(crate) fn resolve_side(
    reaction: &ReactionDescription,
    side: &[(String, f64)],
    side_name: &'static str,
    index: &HashMap<&str, usize>,
) -> MechanismResult<Vec<(usize, f64)>> {
    if side.is_empty() {
        return Err(MechanismError::EmptyReactionSide {
            reaction: reaction.equation.clone(),
            side: side_name,
        });
    }

    let mut resolved: Vec<(usize, f64)> = Vec::with_capacity(side.len());
    for (name, nu) in side {
        let &i = index
            .get(name.as_str())
            .ok_or_else(|| MechanismError::DanglingSpeciesRef {
                reaction: reaction.equation.clone(),
                species: name.clone(),
            })?;
        if !nu.is_finite() || *nu <= 0.0 {
            return Err(MechanismError::InvalidStoichCoefficient {
                reaction: reaction.equation.clone(),
                species: name.clone(),
                value: *nu,
            });
        }
        // "H + H" written as two entries collapses into one
        match resolved.iter_mut().find(|(j, _)| *j == i) {
            Some((_, existing)) => *existing += nu,
            None => resolved.push((i, *nu)),
        }
    }
    Ok(resolved)
}

/// Resolve collision efficiencies to a dense per-species vector.
pub(crate) fn resolve_efficiencies(
    reaction: &ReactionDescription,
    efficiencies: &[(String, f64)],
    index: &HashMap<&str, usize>,
    n_species: usize,
) -> MechanismResult<Vec<f64>> {
    let mut dense = vec![1.0; n_species];
    for (name, eff) in efficiencies {
        let &i = index
            .get(name.as_str())
            .ok_or_else(|| MechanismError::DanglingSpeciesRef {
                reaction: reaction.equation.clone(),
                species: name.clone(),
            })?;
        if !eff.is_finite() || *eff < 0.0 {
            return Err(MechanismError::InvalidRateParameter {
                reaction: reaction.equation.clone(),
                what: "collision efficiency must be finite and non-negative",
            });
        }
        dense[i] = *eff;
    }
    Ok(dense)
}

/// Check a rate law for finite parameters and a non-negative prefactor.
pub(crate) fn validate_rate(
    reaction: &ReactionDescription,
    rate: &Arrhenius,
    what: &'static str,
) -> MechanismResult<()> {
    if !rate.is_finite() {
        return Err(MechanismError::NonFiniteCoefficient {
            what: format!("{what} of reaction '{}'", reaction.equation),
        });
    }
    if rate.a < 0.0 {
        return Err(MechanismError::InvalidRateParameter {
            reaction: reaction.equation.clone(),
            what: "pre-exponential factor must be non-negative",
        });
    }
    Ok(())
}
