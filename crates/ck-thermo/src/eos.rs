//! Ideal-gas mixture relations over `ThermoData`.
//!
//! Mass fractions `y` are indexed like `ThermoData::species_names()`. All
//! specific quantities are per kilogram of mixture, concentrations are in
//! kmol/m³ and temperatures in kelvin.

use ck_core::constants::{P_ATM, R_UNIVERSAL};
use ck_core::units::{Concentration, SpecEnergy, SpecHeatCapacity};
use ck_mechanism::ThermoData;

use crate::error::{ThermoError, ThermoResult};
use crate::mode::EnergyMode;

/// Mixture molar mass `W = 1 / Σ (Y_i / W_i)` from raw molar masses.
///
/// Fails with `InvalidComposition` if any `W_i <= 0`.
pub fn mixture_molar_mass_from(molar_masses: &[f64], y: &[f64]) -> ThermoResult<f64> {
    let mut inv = 0.0;
    for (i, (&w, &yi)) in molar_masses.iter().zip(y).enumerate() {
        if w.is_nan() || w <= 0.0 {
            return Err(ThermoError::InvalidComposition {
                species: i,
                molar_mass: w,
            });
        }
        inv += yi / w;
    }
    Ok(1.0 / inv)
}

/// Mixture molar mass [kg/kmol].
pub fn mixture_molar_mass(thermo: &ThermoData, y: &[f64]) -> ThermoResult<f64> {
    mixture_molar_mass_from(thermo.molar_masses(), y)
}

/// `Σ Y_i / W_i` [kmol/kg]. Compiled tables guarantee `W_i > 0`.
fn inv_mixture_molar_mass(thermo: &ThermoData, y: &[f64]) -> f64 {
    thermo
        .inv_molar_masses()
        .iter()
        .zip(y)
        .map(|(inv_w, yi)| yi * inv_w)
        .sum()
}

/// Pressure `p = ρ R T Σ (Y_i / W_i)` [Pa].
pub fn pressure(thermo: &ThermoData, rho: f64, t: f64, y: &[f64]) -> f64 {
    rho * R_UNIVERSAL * t * inv_mixture_molar_mass(thermo, y)
}

/// Density from pressure: `ρ = p / (R T Σ (Y_i / W_i))` [kg/m³].
pub fn density(thermo: &ThermoData, p: f64, t: f64, y: &[f64]) -> f64 {
    p / (R_UNIVERSAL * t * inv_mixture_molar_mass(thermo, y))
}

/// Mass-weighted sum `Σ Y_i f_i(T) R / W_i`.
fn mass_weighted(thermo: &ThermoData, y: &[f64], f: impl Fn(usize) -> f64) -> f64 {
    let inv_w = thermo.inv_molar_masses();
    let mut sum = 0.0;
    for (i, &yi) in y.iter().enumerate().take(inv_w.len()) {
        if yi != 0.0 {
            sum += yi * inv_w[i] * f(i);
        }
    }
    sum * R_UNIVERSAL
}

/// Specific enthalpy `h = Σ Y_i h_i(T)` [J/kg].
pub fn specific_enthalpy(thermo: &ThermoData, t: f64, y: &[f64]) -> SpecEnergy {
    let polys = thermo.polynomials();
    mass_weighted(thermo, y, |i| polys[i].h_rt(t) * t)
}

/// Specific internal energy `e = Σ Y_i (h_i(T) − R T / W_i)` [J/kg].
pub fn specific_internal_energy(thermo: &ThermoData, t: f64, y: &[f64]) -> SpecEnergy {
    let polys = thermo.polynomials();
    mass_weighted(thermo, y, |i| (polys[i].h_rt(t) - 1.0) * t)
}

/// Constant-pressure specific heat `c_p = Σ Y_i c_p,i(T)` [J/(kg·K)].
pub fn specific_heat_cp(thermo: &ThermoData, t: f64, y: &[f64]) -> SpecHeatCapacity {
    let polys = thermo.polynomials();
    mass_weighted(thermo, y, |i| polys[i].cp_r(t))
}

/// Constant-volume specific heat `c_v = Σ Y_i (c_p,i(T) − R / W_i)` [J/(kg·K)].
pub fn specific_heat_cv(thermo: &ThermoData, t: f64, y: &[f64]) -> SpecHeatCapacity {
    let polys = thermo.polynomials();
    mass_weighted(thermo, y, |i| polys[i].cp_r(t) - 1.0)
}

/// Specific mixture entropy at pressure `p` [J/(kg·K)].
///
/// Each species contributes `s_i°(T) − R ln(X_i p / P_ATM)`; species with
/// zero mole fraction contribute nothing.
pub fn specific_entropy(thermo: &ThermoData, p: f64, t: f64, y: &[f64]) -> f64 {
    let polys = thermo.polynomials();
    let x = mole_fractions(thermo, y);
    mass_weighted(thermo, y, |i| {
        let xi = x[i];
        if xi > 0.0 {
            polys[i].s_r(t) - (xi * p / P_ATM).ln()
        } else {
            0.0
        }
    })
}

/// Caloric quantity selected by `mode` (`e` or `h`).
pub fn energy(mode: EnergyMode, thermo: &ThermoData, t: f64, y: &[f64]) -> SpecEnergy {
    match mode {
        EnergyMode::InternalEnergy => specific_internal_energy(thermo, t, y),
        EnergyMode::Enthalpy => specific_enthalpy(thermo, t, y),
    }
}

/// Temperature derivative of `energy(mode, ..)`: `c_v` or `c_p`.
pub fn heat_capacity(
    mode: EnergyMode,
    thermo: &ThermoData,
    t: f64,
    y: &[f64],
) -> SpecHeatCapacity {
    match mode {
        EnergyMode::InternalEnergy => specific_heat_cv(thermo, t, y),
        EnergyMode::Enthalpy => specific_heat_cp(thermo, t, y),
    }
}

/// Molar concentrations `[X_i] = ρ Y_i / W_i` written into `out`.
///
/// Negative results (from slightly negative mass fractions) are clamped to 0.
pub fn concentrations_into(thermo: &ThermoData, rho: f64, y: &[f64], out: &mut [f64]) {
    for ((c, &yi), &inv_w) in out.iter_mut().zip(y).zip(thermo.inv_molar_masses()) {
        *c = (rho * yi * inv_w).max(0.0);
    }
}

/// Molar concentrations `[X_i]` [kmol/m³].
pub fn concentrations(thermo: &ThermoData, rho: f64, y: &[f64]) -> Vec<Concentration> {
    let mut out = vec![0.0; thermo.num_species()];
    concentrations_into(thermo, rho, y, &mut out);
    out
}

/// Mole fractions `X_i = (Y_i / W_i) / Σ (Y_j / W_j)`.
///
/// An all-zero composition yields all-zero mole fractions.
pub fn mole_fractions(thermo: &ThermoData, y: &[f64]) -> Vec<f64> {
    let inv_w = thermo.inv_molar_masses();
    let total = inv_mixture_molar_mass(thermo, y);
    let mut x: Vec<f64> = y
        .iter()
        .zip(inv_w)
        .map(|(yi, iw)| yi * iw)
        .collect();
    x.resize(thermo.num_species(), 0.0);
    if total != 0.0 {
        for xi in &mut x {
            *xi /= total;
        }
    }
    x
}
