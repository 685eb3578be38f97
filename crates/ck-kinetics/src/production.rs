//! Rates of progress and net molar production rates.

use ck_core::stoich_pow;
use ck_core::units::MolarRate;
use ck_mechanism::{Collider, CompiledReaction, ThermoData};
use ck_thermo::eos;
use tracing::trace;

use crate::arrhenius::rate_constant;
use crate::equilibrium::{equilibrium_constant, species_gibbs_rt};
use crate::falloff::lindemann_rate;

/// Scratch buffers for one rate evaluation.
///
/// Reusing a `Workspace` across calls keeps `net_production_rates_into`
/// free of heap allocation. One workspace per thread.
#[derive(Debug, Clone)]
pub struct Workspace {
    concentrations: Vec<f64>,
    gibbs_rt: Vec<f64>,
    progress: Vec<MolarRate>,
}

impl Workspace {
    pub fn new(thermo: &ThermoData) -> Self {
        Self {
            concentrations: vec![0.0; thermo.num_species()],
            gibbs_rt: vec![0.0; thermo.num_species()],
            progress: vec![0.0; thermo.num_reactions()],
        }
    }

    /// Concentrations from the last evaluation [kmol/m³].
    pub fn concentrations(&self) -> &[f64] {
        &self.concentrations
    }

    /// Rates of progress from the last evaluation [kmol/(m³·s)].
    pub fn rates_of_progress(&self) -> &[f64] {
        &self.progress
    }
}

/// `[M] = Σ ε_i [X_i]`.
#[inline]
fn collider_concentration(efficiencies: &[f64], conc: &[f64]) -> f64 {
    efficiencies.iter().zip(conc).map(|(e, c)| e * c).sum()
}

#[inline]
fn mass_action(side: &[(usize, f64)], conc: &[f64]) -> f64 {
    side.iter()
        .fold(1.0, |acc, &(i, nu)| acc * stoich_pow(conc[i], nu))
}

/// Forward rate constant and the multiplier applied to the rate of progress.
///
/// Three-body reactions keep `[M]` out of `k_f` and return it as the
/// multiplier; falloff reactions fold `[M]` into `k_f` through `Pr`.
#[inline]
fn forward_rate(reaction: &CompiledReaction, t: f64, conc: &[f64]) -> (f64, f64) {
    match &reaction.collider {
        Collider::None => (rate_constant(&reaction.rate, t), 1.0),
        Collider::ThirdBody { efficiencies } => (
            rate_constant(&reaction.rate, t),
            collider_concentration(efficiencies, conc),
        ),
        Collider::Falloff {
            low,
            efficiencies,
            troe,
        } => {
            let m = collider_concentration(efficiencies, conc);
            (
                lindemann_rate(&reaction.rate, low, troe.as_ref(), t, m),
                1.0,
            )
        }
    }
}

/// Rates of progress `q_r` into `ws`, given concentrations already in `ws`.
fn evaluate_progress(thermo: &ThermoData, t: f64, ws: &mut Workspace) {
    species_gibbs_rt(thermo, t, &mut ws.gibbs_rt);
    let conc = &ws.concentrations;
    for (q, reaction) in ws.progress.iter_mut().zip(thermo.reactions()) {
        let (kf, multiplier) = forward_rate(reaction, t, conc);
        let mut rate = kf * mass_action(&reaction.reactants, conc);
        if reaction.reversible {
            let kc = equilibrium_constant(reaction, t, &ws.gibbs_rt);
            rate -= kf / kc * mass_action(&reaction.products, conc);
        }
        *q = rate * multiplier;
    }
}

/// Rates of progress of every reaction, using `ws` for scratch.
///
/// The result is left in `ws` (see [`Workspace::rates_of_progress`]).
pub fn rates_of_progress_into(
    thermo: &ThermoData,
    rho: f64,
    t: f64,
    y: &[f64],
    ws: &mut Workspace,
) {
    eos::concentrations_into(thermo, rho, y, &mut ws.concentrations);
    evaluate_progress(thermo, t, ws);
}

/// Rates of progress `q_r` [kmol/(m³·s)], one per reaction.
pub fn rates_of_progress(thermo: &ThermoData, rho: f64, t: f64, y: &[f64]) -> Vec<MolarRate> {
    let mut ws = Workspace::new(thermo);
    rates_of_progress_into(thermo, rho, t, y, &mut ws);
    ws.progress
}

/// Effective forward rate constants, one per reaction.
///
/// Falloff entries depend on `[M]`, hence on `rho` and `y`. Three-body
/// entries exclude `[M]`.
pub fn forward_rate_constants(thermo: &ThermoData, rho: f64, t: f64, y: &[f64]) -> Vec<f64> {
    let conc = eos::concentrations(thermo, rho, y);
    thermo
        .reactions()
        .iter()
        .map(|r| forward_rate(r, t, &conc).0)
        .collect()
}

/// Net molar production rates `ω_i = Σ_r ν_ir q_r` written into `out`.
///
/// `out` must have one slot per species and `ws` must come from the same
/// mechanism. No heap allocation takes place.
pub fn net_production_rates_into(
    thermo: &ThermoData,
    rho: f64,
    t: f64,
    y: &[f64],
    ws: &mut Workspace,
    out: &mut [f64],
) {
    rates_of_progress_into(thermo, rho, t, y, ws);
    out.fill(0.0);
    for (reaction, &q) in thermo.reactions().iter().zip(&ws.progress) {
        if q == 0.0 {
            continue;
        }
        for &(i, nu) in &reaction.net {
            out[i] += nu * q;
        }
    }
    trace!(t, rho, "net production rates evaluated");
}

/// Net molar production rates [kmol/(m³·s)] in species order.
pub fn net_production_rates(
    thermo: &ThermoData,
    rho: f64,
    t: f64,
    y: &[f64],
) -> Vec<MolarRate> {
    let mut ws = Workspace::new(thermo);
    let mut out = vec![0.0; thermo.num_species()];
    net_production_rates_into(thermo, rho, t, y, &mut ws, &mut out);
    out
}
