//! CLI argument definitions
//!
//! Clap derive structs for `coachwatch` command-line parsing. The only
//! input is the recording path; the remaining switches control diagnostic
//! logging on stderr and never change the report.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

// ============================================================================
// Root CLI
// ============================================================================

/// Detects coaches watching through fixed cameras while their team is alive.
#[derive(Parser, Debug)]
#[command(name = "coachwatch", author, version, about)]
pub struct Cli {
    /// Path to the recorded match event log.
    pub demo: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress diagnostic logging. The report is still written.
    #[arg(short, long)]
    pub quiet: bool,
}
