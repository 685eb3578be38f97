//! Equilibrium constants in concentration units.

use ck_core::constants::{P_ATM, R_UNIVERSAL};
use ck_mechanism::{CompiledReaction, ThermoData};

use crate::arrhenius::clamped_exp;

/// Dimensionless Gibbs functions `g_i°/(R·T)` of every species, into `out`.
pub fn species_gibbs_rt(thermo: &ThermoData, t: f64, out: &mut [f64]) {
    for (g, poly) in out.iter_mut().zip(thermo.polynomials()) {
        *g = poly.g_rt(t);
    }
}

/// `K_c = exp(−ΔG°/(R·T)) · (P_ATM/(R·T))^Δν` for one reaction.
///
/// `g_rt` must hold the output of [`species_gibbs_rt`] at the same `t`.
#[inline]
pub fn equilibrium_constant(reaction: &CompiledReaction, t: f64, g_rt: &[f64]) -> f64 {
    let delta_g: f64 = reaction.net.iter().map(|&(i, nu)| nu * g_rt[i]).sum();
    let mut ln_kc = -delta_g;
    if reaction.delta_nu != 0.0 {
        ln_kc += reaction.delta_nu * (P_ATM / (R_UNIVERSAL * t)).ln();
    }
    clamped_exp(ln_kc)
}

/// Equilibrium constants of every reaction at temperature `t`.
///
/// Irreversible reactions get a value too; it is simply never used for them.
pub fn equilibrium_constants(thermo: &ThermoData, t: f64) -> Vec<f64> {
    let mut g_rt = vec![0.0; thermo.num_species()];
    species_gibbs_rt(thermo, t, &mut g_rt);
    thermo
        .reactions()
        .iter()
        .map(|r| equilibrium_constant(r, t, &g_rt))
        .collect()
}
