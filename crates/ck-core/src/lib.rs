//! ck-core: stable foundation for chemkern.
//!
//! Contains:
//! - units (uom SI types + constructors, physical constants)
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact species/reaction indices)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CkError, CkResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
