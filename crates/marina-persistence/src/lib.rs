//! Persistence for the marina boat registry.
//!
//! The data file holds one boat per line in the form
//! `name,length,placement,detail,amountOwed`, with no header row and no
//! quoting. Loading never fails: an unreadable file starts an empty
//! database and bad lines are reported and skipped. Saving overwrites the
//! file in registry storage order.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use marina_persistence::{load, save};
//!
//! let path = Path::new("BoatData.csv");
//! let mut outcome = load(path);
//! outcome.registry.accrue_monthly_charges();
//! save(path, &outcome.registry)?;
//! ```

mod error;
mod io;

// === Error Types ===
pub use error::{PersistenceError, Result};

// === Loading ===
pub use io::load::{LoadOutcome, LoadSource, RejectReason, RejectedLine, load, load_from_reader};

// === Saving ===
pub use io::save::{SaveSummary, save, write_registry};
