//! Error types for `coachwatch`
//!
//! Only stream-level failures are errors. Missing player properties are
//! resolved to their semantic defaults by the game-state layer and never
//! surface here.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `coachwatch` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Analysis ran to the end of the recording
    pub const SUCCESS: i32 = 0;

    /// Usage error (invalid arguments, reported by clap)
    pub const USAGE_ERROR: i32 = 2;

    /// I/O error (recording not readable, report not writable)
    pub const IO_ERROR: i32 = 3;

    /// The event stream could not be decoded
    pub const DECODE_ERROR: i32 = 4;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `coachwatch` operations.
///
/// Every variant is fatal: the analysis stops at the first one and
/// violations already reported stay reported.
#[derive(Debug, Error)]
pub enum CoachwatchError {
    /// The recording could not be opened
    #[error("cannot open recording {path}")]
    Input {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The event stream failed mid-way
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The report could not be written
    #[error("cannot write report: {0}")]
    Output(#[from] std::io::Error),
}

impl CoachwatchError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Input { .. } | Self::Output(_) => ExitCode::IO_ERROR,
            Self::Decode(_) => ExitCode::DECODE_ERROR,
        }
    }
}

// ============================================================================
// Decode Errors
// ============================================================================

/// Failures of the match event log decoder.
///
/// Line numbers are 1-based and refer to the physical line of the log.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Reading the underlying stream failed
    #[error("read failed after line {line}: {source}")]
    Read {
        /// Last line successfully read
        line: usize,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The line is not a well-formed record
    #[error("line {line}: malformed record: {message}")]
    Malformed {
        /// Offending line
        line: usize,
        /// Message from the JSON decoder
        message: String,
    },

    /// The record carries a type tag this decoder does not know
    #[error("line {line}: unknown record type '{kind}'{}", suggestion_suffix(.suggestion.as_deref()))]
    UnknownRecord {
        /// Offending line
        line: usize,
        /// Tag found in the record
        kind: String,
        /// Closest known tag, if any is near enough
        suggestion: Option<String>,
    },

    /// The match clock went backwards
    #[error("line {line}: time went backwards ({time_ms}ms after {previous_ms}ms)")]
    TimeWentBackwards {
        /// Offending line
        line: usize,
        /// Time carried by the offending record
        time_ms: u64,
        /// Time of the previous record
        previous_ms: u64,
    },

    /// A record refers to a player that never connected
    #[error("line {line}: unknown player {player}")]
    UnknownPlayer {
        /// Offending line
        line: usize,
        /// Player id from the record
        player: u64,
    },
}

impl DecodeError {
    /// Returns the log line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Read { line, .. }
            | Self::Malformed { line, .. }
            | Self::UnknownRecord { line, .. }
            | Self::TimeWentBackwards { line, .. }
            | Self::UnknownPlayer { line, .. } => *line,
        }
    }
}

fn suggestion_suffix(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |s| format!(" (did you mean '{s}'?)"))
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `coachwatch` operations.
pub type Result<T> = std::result::Result<T, CoachwatchError>;

// ============================================================================
// Tests
// ============================================================================
