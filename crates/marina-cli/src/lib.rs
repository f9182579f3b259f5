//! Library components for the marina CLI.

pub mod inventory;
pub mod logging;
pub mod session;
pub mod shell;
