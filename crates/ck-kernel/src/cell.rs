//! Per-cell inputs and outputs for batch evaluation.

use ck_thermo::EnergyMode;
use serde::{Deserialize, Serialize};

/// Conserved state of one CFD cell as handed over by a host solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellInput {
    /// Density [kg/m³]
    pub rho: f64,
    /// Specific internal energy or enthalpy [J/kg], per `mode`
    pub energy: f64,
    /// Temperature guess, usually the previous time step's value [K]
    pub t_guess: f64,
    /// Mass fractions in kernel species order
    pub y: Vec<f64>,
    #[serde(default)]
    pub mode: EnergyMode,
}

/// Closure values returned for one cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellSource {
    /// Temperature [K]
    pub temperature: f64,
    /// Pressure [Pa]
    pub pressure: f64,
    /// Net molar production rates [kmol/(m³·s)]
    pub net_production_rates: Vec<f64>,
}
