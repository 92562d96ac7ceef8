//! Shared integration-test harness: builds match event logs and runs them
//! through the library or the compiled `coachwatch` binary.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use std::rc::Rc;

use coachwatch::analysis::{RunSummary, analyze};
use coachwatch::demo::{PlayerInfo, Property, Record};
use coachwatch::detect::DetectorConfig;
use coachwatch::error::CoachwatchError;
use coachwatch::game::PlayerId;
use coachwatch::report::ReportEmitter;
use tempfile::NamedTempFile;

pub const SPEC: i64 = 1;
pub const T: i64 = 2;
pub const CT: i64 = 3;

pub const FIXED: i64 = 3;
pub const IN_EYE: i64 = 4;
pub const CHASE: i64 = 5;

/// Fluent builder for JSONL event logs. Times are in milliseconds.
#[derive(Debug, Default, Clone)]
pub struct LogBuilder {
    lines: Vec<String>,
}

impl LogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(mut self, record: &Record) -> Self {
        let line = serde_json::to_string(record).expect("record serializes");
        self.lines.push(line);
        self
    }

    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_owned());
        self
    }

    /// A spectating coach with the given coached side and camera mode.
    pub fn coach(self, time_ms: u64, id: u64, name: &str, coaching: i64, mode: i64) -> Self {
        self.record(&Record::PlayerConnect {
            time_ms,
            player: PlayerInfo {
                id: PlayerId(id),
                name: name.to_owned(),
                team: Some(SPEC),
                coaching_team: Some(coaching),
                alive: false,
                observer_mode: Some(mode),
            },
        })
    }

    /// A playing participant.
    pub fn player(self, time_ms: u64, id: u64, name: &str, team: i64, alive: bool) -> Self {
        self.record(&Record::PlayerConnect {
            time_ms,
            player: PlayerInfo {
                id: PlayerId(id),
                name: name.to_owned(),
                team: Some(team),
                coaching_team: None,
                alive,
                observer_mode: None,
            },
        })
    }

    pub fn update(self, time_ms: u64, id: u64, property: Property, value: i64) -> Self {
        self.record(&Record::PropertyUpdate {
            time_ms,
            player: PlayerId(id),
            property,
            value,
        })
    }

    pub fn camera(self, time_ms: u64, id: u64, mode: i64) -> Self {
        self.update(time_ms, id, Property::ObserverMode, mode)
    }

    pub fn dies(self, time_ms: u64, id: u64) -> Self {
        self.update(time_ms, id, Property::Alive, 0)
    }

    pub fn rounds_played(self, time_ms: u64, total: u32) -> Self {
        self.record(&Record::RoundsPlayed { time_ms, total })
    }

    pub fn freezetime_end(self, time_ms: u64) -> Self {
        self.record(&Record::FreezetimeEnd { time_ms })
    }

    pub fn round_end(self, time_ms: u64) -> Self {
        self.record(&Record::RoundEnd { time_ms })
    }

    pub fn disconnect(self, time_ms: u64, id: u64) -> Self {
        self.record(&Record::PlayerDisconnect {
            time_ms,
            player: PlayerId(id),
        })
    }

    pub fn build(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    pub fn write_temp(&self) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp log");
        file.write_all(self.build().as_bytes())
            .expect("write temp log");
        file.flush().expect("flush temp log");
        file
    }
}

#[derive(Clone)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Runs a log through the library with default thresholds and returns the
/// outcome plus every report line written.
pub fn analyze_log(log: &str) -> (Result<RunSummary, CoachwatchError>, Vec<String>) {
    analyze_log_with(log, DetectorConfig::default())
}

pub fn analyze_log_with(
    log: &str,
    config: DetectorConfig,
) -> (Result<RunSummary, CoachwatchError>, Vec<String>) {
    let buf = SharedBuf(Rc::new(RefCell::new(Vec::new())));
    let mut emitter = ReportEmitter::new(Box::new(buf.clone()));
    let result = analyze(log.as_bytes(), config, &mut emitter);
    let lines = String::from_utf8_lossy(&buf.0.borrow())
        .lines()
        .map(str::to_owned)
        .collect();
    (result, lines)
}

/// Runs the compiled binary with `args` and waits for it to exit.
pub fn spawn_command(args: &[&str]) -> Output {
    spawn_command_with_env(args, &[])
}

/// Runs the compiled binary with `args` and extra environment variables.
pub fn spawn_command_with_env(args: &[&str], envs: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coachwatch"))
        .args(args)
        .env_remove("COACHWATCH_LOG_LEVEL")
        .envs(envs.iter().copied())
        .output()
        .expect("failed to spawn coachwatch")
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("non-UTF-8 temp path")
}
