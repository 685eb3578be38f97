//! ck-kinetics: gas-phase reaction rates for chemkern.
//!
//! Mass-action kinetics over compiled `ThermoData`:
//! - modified Arrhenius rate constants with a clamped exponent
//! - third-body and Lindemann/Troe falloff reactions
//! - equilibrium constants from NASA-7 Gibbs functions
//! - rates of progress and net molar production rates
//!
//! Nothing here fails: non-physical states give non-physical (possibly
//! non-finite) rates, which callers are expected to check.

pub mod arrhenius;
pub mod equilibrium;
pub mod falloff;
pub mod production;

pub use arrhenius::{MAX_EXP_ARG, rate_constant};
pub use equilibrium::{equilibrium_constant, equilibrium_constants, species_gibbs_rt};
pub use falloff::{lindemann_rate, troe_broadening};
pub use production::{
    Workspace, forward_rate_constants, net_production_rates, net_production_rates_into,
    rates_of_progress, rates_of_progress_into,
};
