//! Observability
//!
//! Diagnostic logging for analysis runs.

pub mod logging;

pub use logging::init_logging;
