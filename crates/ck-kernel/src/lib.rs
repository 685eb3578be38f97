//! ck-kernel: thermochemistry kernel facade for CFD host codes.
//!
//! A `Kernel` is built once from a `MechanismDescription` and then answers
//! per-cell queries: pressure from (ρ, T, Y), temperature from (e or h, Y)
//! and net species production rates. `evaluate_cells` runs whole batches of
//! cells in parallel with rayon.
//!
//! # Example
//!
//! ```
//! use ck_kernel::Kernel;
//! use ck_mechanism::builtin;
//! use ck_thermo::EnergyMode;
//!
//! let kernel = Kernel::new(&builtin::san_diego_h2()).unwrap();
//! let y = vec![1.0 / 9.0; kernel.num_species()];
//! let t = kernel
//!     .get_temperature(2.3624875e7, 320.0, &y, EnergyMode::InternalEnergy)
//!     .unwrap();
//! assert!((t - 300.0).abs() < 0.1);
//! ```

pub mod cell;
pub mod config;
pub mod error;
pub mod identity;
pub mod kernel;

pub use cell::{CellInput, CellSource};
pub use config::KernelConfig;
pub use error::{KernelError, KernelResult};
pub use identity::KernelIdentity;
pub use kernel::Kernel;

// Re-export so host codes need only this crate.
pub use ck_mechanism::{MechanismDescription, builtin};
pub use ck_solver::{FailureReason, NewtonConfig, SolverError, TemperatureSolution};
pub use ck_thermo::{EnergyMode, MixtureState};
