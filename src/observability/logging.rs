//! Logging initialization for `coachwatch`.
//!
//! Provides human-readable structured logging via `tracing` with
//! configurable verbosity and an override via `COACHWATCH_LOG_LEVEL`.
//! Logs always go to stderr so stdout carries only the report.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Maps a verbosity level to a tracing directive string.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initializes the global tracing subscriber.
///
/// If `COACHWATCH_LOG_LEVEL` is set it takes precedence over `verbosity`.
/// Color is used only when stderr is a terminal and `NO_COLOR` is unset.
///
/// Uses `try_init()` so calling this more than once (e.g. in tests) is safe.
pub fn init_logging(verbosity: u8) {
    let default_directive = verbosity_to_directive(verbosity);

    let filter = EnvFilter::try_from_env("COACHWATCH_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let use_ansi = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_does_not_panic() {
        // try_init is idempotent; repeated calls return Err and are ignored
        init_logging(0);
        init_logging(3);
    }

    #[test]
    fn verbosity_directives() {
        assert_eq!(verbosity_to_directive(0), "warn");
        assert_eq!(verbosity_to_directive(1), "info");
        assert_eq!(verbosity_to_directive(2), "debug");
        assert_eq!(verbosity_to_directive(3), "trace");
        assert_eq!(verbosity_to_directive(255), "trace");
    }
}
