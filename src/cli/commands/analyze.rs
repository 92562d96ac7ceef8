//! Analyze a single recording and print the report to stdout.

use tracing::debug;

use crate::analysis;
use crate::cli::args::Cli;
use crate::detect::DetectorConfig;
use crate::error::CoachwatchError;
use crate::report::ReportEmitter;

/// Runs the analysis described by `cli` with the fixed detector thresholds.
///
/// # Errors
///
/// Returns an error if the recording cannot be opened or decoded, or if the
/// report cannot be written.
pub fn run(cli: &Cli) -> Result<(), CoachwatchError> {
    let config = DetectorConfig::default();
    debug!(
        demo = %cli.demo.display(),
        in_eye_grace = %humantime::format_duration(config.in_eye_grace),
        disconnect_grace = %humantime::format_duration(config.disconnect_grace),
        "starting analysis"
    );

    let mut emitter = ReportEmitter::stdout();
    analysis::analyze_file(&cli.demo, config, &mut emitter)?;
    Ok(())
}
