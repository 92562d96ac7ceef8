//! Analysis report output.
//!
//! Report events are rendered as the plain text lines operators grep for.
//! Each line is flushed as soon as it is written so confirmed violations
//! survive a later fatal error.

use std::io::{BufWriter, Write};

use crate::detect::Violation;

// ---------------------------------------------------------------------------
// Report events
// ---------------------------------------------------------------------------

/// A single report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// Analysis of a recording began.
    AnalysisStarted {
        /// Recording path as given.
        path: String,
    },

    /// A violation was confirmed.
    Violation(Violation),

    /// Analysis reached the end of the recording.
    AnalysisFinished {
        /// Recording path as given.
        path: String,
    },
}

impl ReportEvent {
    /// Plain text rendering of the event.
    #[must_use]
    pub fn to_human(&self) -> String {
        match self {
            Self::AnalysisStarted { path } => format!("Analyze started: {path}"),
            Self::Violation(v) => v.to_string(),
            Self::AnalysisFinished { path } => format!("Analyze ended: {path}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// Buffered, line-flushed report writer.
pub struct ReportEmitter {
    writer: BufWriter<Box<dyn Write>>,
    lines: u64,
}

// Box<dyn Write> is not Debug.
impl std::fmt::Debug for ReportEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportEmitter")
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl ReportEmitter {
    /// Creates an emitter writing report lines to `writer`.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer: BufWriter::new(writer),
            lines: 0,
        }
    }

    /// Creates an emitter writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    /// Writes one event as a line and flushes it.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the line cannot be written or flushed.
    pub fn emit(&mut self, event: &ReportEvent) -> std::io::Result<()> {
        writeln!(self.writer, "{}", event.to_human())?;
        self.writer.flush()?;
        self.lines += 1;
        Ok(())
    }

    /// Number of lines written so far.
    #[must_use]
    pub const fn lines(&self) -> u64 {
        self.lines
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
