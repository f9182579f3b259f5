//! Data file reading and writing.

pub mod load;
pub mod save;
