//! CLI command dispatch
//!
//! Routes a parsed invocation to its handler.

pub mod analyze;

use crate::cli::args::Cli;
use crate::error::CoachwatchError;

/// Dispatch a parsed CLI invocation.
///
/// # Errors
///
/// Returns an error if the analysis fails.
pub fn dispatch(cli: &Cli) -> Result<(), CoachwatchError> {
    analyze::run(cli)
}
