//! ck-mechanism: static reaction-mechanism data for chemkern.
//!
//! Provides:
//! - NASA 7-coefficient thermodynamic polynomials
//! - Species and reaction descriptions (the precompiled mechanism artifact)
//! - Incremental mechanism builder with validation
//! - `ThermoData`, the immutable, index-resolved tables every evaluation reads
//! - The built-in San Diego hydrogen/oxygen mechanism
//!
//! # Example
//!
//! ```
//! use ck_mechanism::builtin;
//!
//! let thermo = builtin::san_diego_h2().compile().unwrap();
//! assert_eq!(thermo.num_species(), 9);
//! assert_eq!(thermo.species_names()[8], "N2");
//! ```

pub mod builder;
pub mod builtin;
pub mod description;
pub mod error;
pub mod nasa7;
pub mod reaction;
pub mod thermo_data;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::MechanismBuilder;
pub use description::{MechanismDescription, SpeciesDescription};
pub use error::{MechanismError, MechanismResult};
pub use nasa7::Nasa7;
pub use reaction::{Arrhenius, ReactionDescription, ReactionKind, Troe};
pub use thermo_data::{Collider, CompiledReaction, ThermoData};
