//! Record model for the marina boat inventory.
//!
//! A [`BoatRecord`] ties a boat's identity and balance to a
//! [`PlacementDetail`], the tagged placement payload whose variant also
//! determines the boat's [`PlacementKind`].

pub mod amount;
pub mod boat;
pub mod error;
pub mod placement;

pub use amount::{format_amount, parse_amount};
pub use boat::{BoatRecord, MAX_NAME_LEN, compare_names, names_match};
pub use error::{ParseError, Result};
pub use placement::{MAX_LICENSE_LEN, PlacementDetail, PlacementKind};
pub use rust_decimal::Decimal;
