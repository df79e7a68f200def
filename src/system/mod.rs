//! System-level modules
//!
//! Logging setup.

pub mod logging;

pub use logging::init_logging;
