//! ck-thermo: ideal-gas mixture equation of state for chemkern.
//!
//! Provides:
//! - Mixture molar mass, pressure, density
//! - Specific internal energy, enthalpy, entropy and heat capacities
//! - Molar concentrations and mole fractions
//! - `EnergyMode`, the internal-energy / enthalpy branch selector
//! - `MixtureState`, the caller-owned (ρ, T, Y) triple
//!
//! Every function here is a pure function of `ThermoData` and its explicit
//! arguments. Non-physical inputs (negative density, T = 0, Y not summing to
//! one) are not rejected; they produce whatever the formulas give.
//!
//! # Example
//!
//! ```
//! use ck_mechanism::builtin;
//! use ck_thermo::eos;
//!
//! let thermo = builtin::san_diego_h2().compile().unwrap();
//! let y = vec![1.0 / 9.0; 9];
//! let p = eos::pressure(&thermo, 0.2040, 300.0, &y);
//! assert!((p - 101_296.2).abs() < 0.5);
//! ```

pub mod eos;
pub mod error;
pub mod mode;
pub mod state;

pub use eos::{
    concentrations, concentrations_into, density, energy, heat_capacity, mixture_molar_mass,
    mixture_molar_mass_from, mole_fractions, pressure, specific_enthalpy, specific_entropy,
    specific_heat_cp, specific_heat_cv, specific_internal_energy,
};
pub use error::{ThermoError, ThermoResult};
pub use mode::EnergyMode;
pub use state::MixtureState;
