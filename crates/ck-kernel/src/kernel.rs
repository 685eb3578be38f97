//! The `Kernel` facade.

use std::sync::Arc;

use ck_core::units::{Pressure, pa};
use ck_core::SpeciesId;
use ck_kinetics::Workspace;
use ck_mechanism::{MechanismDescription, ThermoData};
use ck_solver::{TemperatureSolution, solve_temperature};
use ck_thermo::{EnergyMode, MixtureState, eos};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::cell::{CellInput, CellSource};
use crate::config::KernelConfig;
use crate::error::{KernelError, KernelResult};
use crate::identity::KernelIdentity;

/// Immutable thermochemistry model bound to one mechanism.
///
/// Cloning is cheap (the tables sit behind an `Arc`) and a `Kernel` can be
/// shared across threads. Every method is a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct Kernel {
    identity: KernelIdentity,
    thermo: Arc<ThermoData>,
    config: KernelConfig,
}

impl Kernel {
    /// Validate and compile `description` with the default configuration.
    pub fn new(description: &MechanismDescription) -> KernelResult<Self> {
        Self::with_config(description, KernelConfig::default())
    }

    pub fn with_config(
        description: &MechanismDescription,
        config: KernelConfig,
    ) -> KernelResult<Self> {
        let thermo = description.compile()?;
        Ok(Self::from_thermo(Arc::new(thermo), config))
    }

    /// Wrap already compiled tables.
    pub fn from_thermo(thermo: Arc<ThermoData>, config: KernelConfig) -> Self {
        let identity = KernelIdentity::from_thermo(&thermo);
        debug!(
            model = identity.model_name(),
            species = identity.num_species(),
            reactions = thermo.num_reactions(),
            "kernel ready"
        );
        Self {
            identity,
            thermo,
            config,
        }
    }

    pub fn identity(&self) -> &KernelIdentity {
        &self.identity
    }

    pub fn num_species(&self) -> usize {
        self.identity.num_species()
    }

    pub fn model_name(&self) -> &str {
        self.identity.model_name()
    }

    pub fn species_names(&self) -> &[String] {
        self.identity.species_names()
    }

    pub fn species_index(&self, name: &str) -> Option<SpeciesId> {
        self.thermo.species_index(name)
    }

    pub fn thermo(&self) -> &Arc<ThermoData> {
        &self.thermo
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    fn check_len(&self, y: &[f64]) -> KernelResult<()> {
        let expected = self.num_species();
        if y.len() == expected {
            Ok(())
        } else {
            Err(KernelError::LengthMismatch {
                expected,
                actual: y.len(),
            })
        }
    }

    /// Pressure [Pa] of the ideal-gas mixture.
    pub fn pressure(&self, rho: f64, t: f64, y: &[f64]) -> KernelResult<f64> {
        self.check_len(y)?;
        Ok(eos::pressure(&self.thermo, rho, t, y))
    }

    pub fn pressure_of(&self, state: &MixtureState) -> KernelResult<Pressure> {
        self.pressure(state.rho_si(), state.t_si(), state.mass_fractions())
            .map(pa)
    }

    /// Invert `e(T)` or `h(T)` for the temperature, starting from `t_guess`.
    pub fn get_temperature(
        &self,
        target: f64,
        t_guess: f64,
        y: &[f64],
        mode: EnergyMode,
    ) -> KernelResult<f64> {
        self.solve_temperature(target, t_guess, y, mode)
            .map(|sol| sol.temperature)
    }

    /// Like `get_temperature`, but also reports residual and iteration count.
    pub fn solve_temperature(
        &self,
        target: f64,
        t_guess: f64,
        y: &[f64],
        mode: EnergyMode,
    ) -> KernelResult<TemperatureSolution> {
        self.check_len(y)?;
        solve_temperature(&self.thermo, target, t_guess, y, mode, &self.config.newton)
            .map_err(KernelError::from)
    }

    /// Net molar production rates [kmol/(m³·s)] in species order.
    pub fn net_production_rates(&self, rho: f64, t: f64, y: &[f64]) -> KernelResult<Vec<f64>> {
        self.check_len(y)?;
        Ok(ck_kinetics::net_production_rates(&self.thermo, rho, t, y))
    }

    pub fn net_production_rates_of(&self, state: &MixtureState) -> KernelResult<Vec<f64>> {
        self.net_production_rates(state.rho_si(), state.t_si(), state.mass_fractions())
    }

    /// Rates of progress [kmol/(m³·s)] in reaction order.
    pub fn rates_of_progress(&self, rho: f64, t: f64, y: &[f64]) -> KernelResult<Vec<f64>> {
        self.check_len(y)?;
        Ok(ck_kinetics::rates_of_progress(&self.thermo, rho, t, y))
    }

    pub fn mixture_molar_mass(&self, y: &[f64]) -> KernelResult<f64> {
        self.check_len(y)?;
        Ok(eos::mixture_molar_mass(&self.thermo, y)?)
    }

    pub fn specific_internal_energy(&self, t: f64, y: &[f64]) -> KernelResult<f64> {
        self.check_len(y)?;
        Ok(eos::specific_internal_energy(&self.thermo, t, y))
    }

    pub fn specific_enthalpy(&self, t: f64, y: &[f64]) -> KernelResult<f64> {
        self.check_len(y)?;
        Ok(eos::specific_enthalpy(&self.thermo, t, y))
    }

    pub fn specific_heat_cv(&self, t: f64, y: &[f64]) -> KernelResult<f64> {
        self.check_len(y)?;
        Ok(eos::specific_heat_cv(&self.thermo, t, y))
    }

    pub fn specific_heat_cp(&self, t: f64, y: &[f64]) -> KernelResult<f64> {
        self.check_len(y)?;
        Ok(eos::specific_heat_cp(&self.thermo, t, y))
    }

    pub fn concentrations(&self, rho: f64, y: &[f64]) -> KernelResult<Vec<f64>> {
        self.check_len(y)?;
        Ok(eos::concentrations(&self.thermo, rho, y))
    }

    /// Invert temperature, then evaluate pressure and production rates.
    pub fn evaluate(&self, cell: &CellInput) -> KernelResult<CellSource> {
        let mut ws = Workspace::new(&self.thermo);
        self.evaluate_with(cell, &mut ws)
    }

    fn evaluate_with(&self, cell: &CellInput, ws: &mut Workspace) -> KernelResult<CellSource> {
        let sol = self.solve_temperature(cell.energy, cell.t_guess, &cell.y, cell.mode)?;
        let t = sol.temperature;
        let pressure = eos::pressure(&self.thermo, cell.rho, t, &cell.y);
        let mut rates = vec![0.0; self.num_species()];
        ck_kinetics::net_production_rates_into(&self.thermo, cell.rho, t, &cell.y, ws, &mut rates);
        Ok(CellSource {
            temperature: t,
            pressure,
            net_production_rates: rates,
        })
    }

    /// Evaluate independent cells in parallel, preserving input order.
    ///
    /// One failing cell does not affect the others.
    pub fn evaluate_cells(&self, cells: &[CellInput]) -> Vec<KernelResult<CellSource>> {
        let results: Vec<KernelResult<CellSource>> = cells
            .par_iter()
            .map_init(
                || Workspace::new(&self.thermo),
                |ws, cell| self.evaluate_with(cell, ws),
            )
            .collect();
        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!(failed, total = cells.len(), "cell evaluations failed");
        }
        results
    }
}
