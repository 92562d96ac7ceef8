//! Analysis run: drives the detector from a recording.
//!
//! Pulls match events from a [`DemoParser`] and dispatches each one to the
//! matching [`Detector`] handler, writing confirmed violations as they
//! happen. The first decode error aborts the run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::demo::{DemoParser, MatchEvent, Property};
use crate::detect::{Detector, DetectorConfig, Violation};
use crate::error::{CoachwatchError, Result};
use crate::game::ObserverMode;
use crate::report::{ReportEmitter, ReportEvent};

/// Counters for one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Match events dispatched to the detector.
    pub events: u64,
    /// Freezetime-end events seen.
    pub rounds_started: u64,
    /// Round-end events seen.
    pub rounds_ended: u64,
    /// Violations reported.
    pub violations: u64,
}

/// Runs the detector over an event log.
///
/// # Errors
///
/// Returns [`CoachwatchError::Decode`] if the log fails to decode and
/// [`CoachwatchError::Output`] if a violation cannot be written. Violations
/// written before the error stay written.
pub fn analyze<R: BufRead>(
    reader: R,
    config: DetectorConfig,
    emitter: &mut ReportEmitter,
) -> Result<RunSummary> {
    let mut parser = DemoParser::new(reader);
    parser.subscribe(Property::ObserverMode);

    let mut detector = Detector::new(config);
    let mut summary = RunSummary::default();

    while let Some(event) = parser.next_event().inspect_err(|e| {
        warn!(line = e.line(), error = %e, "event log decode failed");
    })? {
        summary.events += 1;
        let game = parser.state();

        let violations: Vec<Violation> = match event {
            MatchEvent::RoundFreezetimeEnd => {
                summary.rounds_started += 1;
                detector.on_round_start(game);
                Vec::new()
            }
            MatchEvent::RoundEnd => {
                summary.rounds_ended += 1;
                detector.on_round_end(game)
            }
            MatchEvent::PlayerDisconnected(player) => {
                detector.on_disconnect(game, player).into_iter().collect()
            }
            MatchEvent::PropertyChanged {
                player,
                property: Property::ObserverMode,
                value,
            } => {
                detector.on_camera_mode_change(game, player, ObserverMode::from_raw(value));
                Vec::new()
            }
            MatchEvent::PropertyChanged { .. } => Vec::new(),
        };

        for violation in violations {
            info!(
                round = violation.round,
                player = %violation.player_id,
                name = %violation.name,
                team = violation.team.tag(),
                "violation confirmed"
            );
            summary.violations += 1;
            emitter.emit(&ReportEvent::Violation(violation))?;
        }
    }

    debug!(lines = parser.line(), events = summary.events, "event log exhausted");
    Ok(summary)
}

/// Analyzes the recording at `path`, bracketed by start and end banners.
///
/// # Errors
///
/// Returns [`CoachwatchError::Input`] if the file cannot be opened, plus
/// everything [`analyze`] can return.
pub fn analyze_file(
    path: &Path,
    config: DetectorConfig,
    emitter: &mut ReportEmitter,
) -> Result<RunSummary> {
    let shown = path.display().to_string();
    emitter.emit(&ReportEvent::AnalysisStarted {
        path: shown.clone(),
    })?;

    let file = File::open(path).map_err(|source| CoachwatchError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    let summary = analyze(BufReader::new(file), config, emitter)?;

    info!(
        path = %shown,
        events = summary.events,
        rounds = summary.rounds_started,
        violations = summary.violations,
        "analysis finished"
    );

    emitter.emit(&ReportEvent::AnalysisFinished { path: shown })?;

    Ok(summary)
}
