//! Immutable, index-resolved mechanism tables.
//!
//! `ThermoData` is built once from a [`MechanismDescription`] and then only
//! read. Species live in parallel flat arrays; reactions reference species by
//! array index, so the evaluation loops never chase pointers or hash names.

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use ck_core::{ReactionId, SpeciesId};

use crate::description::MechanismDescription;
use crate::error::{MechanismError, MechanismResult};
use crate::nasa7::Nasa7;
use crate::reaction::{Arrhenius, ReactionKind, Troe};
use crate::validate;

/// Relative tolerance on the per-reaction mass balance.
const MASS_BALANCE_REL_TOL: f64 = 1e-9;

/// Third-body treatment of a compiled reaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Collider {
    None,
    /// Dense collision efficiencies, one per species.
    ThirdBody { efficiencies: Vec<f64> },
    Falloff {
        low: Arrhenius,
        efficiencies: Vec<f64>,
        troe: Option<Troe>,
    },
}

/// A reaction with every species resolved to an index.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledReaction {
    pub equation: String,
    pub reactants: Vec<(usize, f64)>,
    pub products: Vec<(usize, f64)>,
    /// Net stoichiometry `ν'' − ν'`, zero entries dropped
    pub net: Vec<(usize, f64)>,
    /// `Σν'' − Σν'`, the change in moles of gas
    pub delta_nu: f64,
    pub rate: Arrhenius,
    pub reversible: bool,
    pub collider: Collider,
}

/// Read-only thermodynamic and kinetic tables for one mechanism.
#[derive(Debug, Clone)]
pub struct ThermoData {
    name: String,
    species_names: Vec<String>,
    molar_masses: Vec<f64>,
    inv_molar_masses: Vec<f64>,
    polynomials: Vec<Nasa7>,
    reactions: Vec<CompiledReaction>,
    /// Net stoichiometric matrix, species x reactions
    stoichiometry: DMatrix<f64>,
    t_min: f64,
    t_max: f64,
}

impl ThermoData {
    /// Validate a description and build the tables.
    pub fn compile(desc: &MechanismDescription) -> MechanismResult<Self> {
        let index = validate::validate_species(desc)?;
        let n = desc.species.len();

        let mut reactions = Vec::with_capacity(desc.reactions.len());
        for r in &desc.reactions {
            validate::validate_rate(r, &r.rate, "rate constant")?;
            let reactants = validate::resolve_side(r, &r.reactants, "reactants", &index)?;
            let products = validate::resolve_side(r, &r.products, "products", &index)?;

            let collider = match &r.kind {
                ReactionKind::Elementary => Collider::None,
                ReactionKind::ThreeBody { efficiencies } => Collider::ThirdBody {
                    efficiencies: validate::resolve_efficiencies(r, efficiencies, &index, n)?,
                },
                ReactionKind::Falloff {
                    low,
                    efficiencies,
                    troe,
                } => {
                    validate::validate_rate(r, low, "low-pressure rate constant")?;
                    if let Some(t) = troe {
                        let finite = t.a.is_finite()
                            && t.t3.is_finite()
                            && t.t1.is_finite()
                            && t.t2.is_none_or(f64::is_finite);
                        if !finite || t.t3 == 0.0 || t.t1 == 0.0 {
                            return Err(MechanismError::InvalidRateParameter {
                                reaction: r.equation.clone(),
                                what: "Troe parameters must be finite with non-zero T1 and T3",
                            });
                        }
                    }
                    Collider::Falloff {
                        low: *low,
                        efficiencies: validate::resolve_efficiencies(
                            r,
                            efficiencies,
                            &index,
                            n,
                        )?,
                        troe: *troe,
                    }
                }
            };

            let net = net_stoichiometry(&reactants, &products);
            let delta_nu = products.iter().map(|(_, nu)| nu).sum::<f64>()
                - reactants.iter().map(|(_, nu)| nu).sum::<f64>();

            reactions.push(CompiledReaction {
                equation: r.equation.clone(),
                reactants,
                products,
                net,
                delta_nu,
                rate: r.rate,
                reversible: r.reversible,
                collider,
            });
        }

        let molar_masses: Vec<f64> = desc.species.iter().map(|s| s.molar_mass).collect();
        let stoichiometry = stoichiometric_matrix(n, &reactions);
        check_mass_balance(&stoichiometry, &molar_masses, &reactions)?;

        let polynomials: Vec<Nasa7> = desc.species.iter().map(|s| s.thermo).collect();
        let t_min = polynomials
            .iter()
            .map(|p| p.t_low)
            .fold(f64::NEG_INFINITY, f64::max);
        let t_max = polynomials
            .iter()
            .map(|p| p.t_high)
            .fold(f64::INFINITY, f64::min);
        if t_min >= t_max {
            return Err(MechanismError::EmptyTemperatureRange {
                name: desc.name.clone(),
            });
        }

        debug!(
            mechanism = %desc.name,
            species = n,
            reactions = reactions.len(),
            t_min,
            t_max,
            "compiled mechanism"
        );

        Ok(Self {
            name: desc.name.clone(),
            species_names: desc.species.iter().map(|s| s.name.clone()).collect(),
            inv_molar_masses: molar_masses.iter().map(|w| 1.0 / w).collect(),
            molar_masses,
            polynomials,
            reactions,
            stoichiometry,
            t_min,
            t_max,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_species(&self) -> usize {
        self.species_names.len()
    }

    pub fn num_reactions(&self) -> usize {
        self.reactions.len()
    }

    pub fn species_names(&self) -> &[String] {
        &self.species_names
    }

    /// Look up a species index by name.
    pub fn species_index(&self, name: &str) -> Option<SpeciesId> {
        self.species_names
            .iter()
            .position(|s| s == name)
            .map(|i| SpeciesId::from_index(i as u32))
    }

    /// Molar masses [kg/kmol] in species order.
    pub fn molar_masses(&self) -> &[f64] {
        &self.molar_masses
    }

    /// Reciprocal molar masses [kmol/kg], precomputed for the hot loops.
    pub fn inv_molar_masses(&self) -> &[f64] {
        &self.inv_molar_masses
    }

    pub fn polynomials(&self) -> &[Nasa7] {
        &self.polynomials
    }

    pub fn reactions(&self) -> &[CompiledReaction] {
        &self.reactions
    }

    pub fn reaction(&self, id: ReactionId) -> Option<&CompiledReaction> {
        self.reactions.get(id.ix())
    }

    /// Net stoichiometric matrix `ν`, species x reactions.
    pub fn stoichiometry(&self) -> &DMatrix<f64> {
        &self.stoichiometry
    }

    /// Temperature range covered by every species polynomial [K].
    pub fn temperature_range(&self) -> (f64, f64) {
        (self.t_min, self.t_max)
    }
}

fn net_stoichiometry(reactants: &[(usize, f64)], products: &[(usize, f64)]) -> Vec<(usize, f64)> {
    let mut net: Vec<(usize, f64)> = products.to_vec();
    for &(i, nu) in reactants {
        match net.iter_mut().find(|(j, _)| *j == i) {
            Some((_, existing)) => *existing -= nu,
            None => net.push((i, -nu)),
        }
    }
    net.retain(|(_, nu)| *nu != 0.0);
    net.sort_by_key(|(i, _)| *i);
    net
}

fn stoichiometric_matrix(n_species: usize, reactions: &[CompiledReaction]) -> DMatrix<f64> {
    let mut nu = DMatrix::zeros(n_species, reactions.len());
    for (r, reaction) in reactions.iter().enumerate() {
        for &(i, coeff) in &reaction.net {
            nu[(i, r)] = coeff;
        }
    }
    nu
}

/// Every reaction must satisfy `Σ_i ν_ir W_i = 0`, i.e. `νᵀ W = 0`.
fn check_mass_balance(
    stoichiometry: &DMatrix<f64>,
    molar_masses: &[f64],
    reactions: &[CompiledReaction],
) -> MechanismResult<()> {
    let w = DVector::from_column_slice(molar_masses);
    let imbalance = stoichiometry.transpose() * &w;
    let scale = stoichiometry.abs().transpose() * &w;

    for (r, reaction) in reactions.iter().enumerate() {
        if imbalance[r].abs() > MASS_BALANCE_REL_TOL * scale[r] {
            return Err(MechanismError::MassImbalance {
                reaction: reaction.equation.clone(),
                imbalance: imbalance[r],
            });
        }
    }
    Ok(())
}
