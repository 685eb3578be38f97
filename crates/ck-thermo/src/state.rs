//! Mixture state carried by the caller.

use ck_core::units::{Density, Temperature, k, kgpm3};

/// Density, temperature and mass fractions of one cell.
///
/// Values are stored as given and never checked. Mass fractions are
/// expected to sum to one but are never renormalised here.
#[derive(Debug, Clone, PartialEq)]
pub struct MixtureState {
    rho: Density,
    t: Temperature,
    y: Vec<f64>,
}

impl MixtureState {
    pub fn new(rho: Density, t: Temperature, y: Vec<f64>) -> Self {
        Self { rho, t, y }
    }

    /// Build from raw SI values (kg/m³, K).
    pub fn from_si(rho: f64, t: f64, y: Vec<f64>) -> Self {
        Self::new(kgpm3(rho), k(t), y)
    }

    pub fn mass_fractions(&self) -> &[f64] {
        &self.y
    }

    /// Density in kg/m³.
    pub fn rho_si(&self) -> f64 {
        self.rho.value
    }

    /// Temperature in K.
    pub fn t_si(&self) -> f64 {
        self.t.value
    }
}
