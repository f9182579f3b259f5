//! Boat registry operations.
//!
//! The [`BoatRegistry`] owns every [`BoatRecord`](marina_model::BoatRecord)
//! in the marina. It keeps records in insertion order for storage and sorts
//! by name only when an ordered view is requested.

pub mod error;
pub mod rates;
pub mod registry;

pub use error::{RegistryError, Result};
pub use rates::{monthly_charge, monthly_rate};
pub use registry::{BoatRegistry, MAX_BOATS};
