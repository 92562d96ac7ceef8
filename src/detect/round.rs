//! Round boundary tracking.

use std::time::Duration;

/// Lifecycle of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// No freezetime-end seen yet.
    #[default]
    NotStarted,
    /// Between freezetime-end and round-end.
    Active,
    /// After round-end, until the next freezetime-end.
    Ended,
}

/// Snapshot of a round as known to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// Round number, starting at 1.
    pub number: u32,
    /// Current phase.
    pub phase: RoundPhase,
    /// Match time at freezetime-end.
    pub started_at: Duration,
}

/// Tracks the current round number, whether it is live, and when it began.
///
/// The round is replaced wholesale on every freezetime-end and only its phase
/// changes on round-end.
#[derive(Debug, Clone)]
pub struct RoundTracker {
    round: Round,
}

impl RoundTracker {
    /// Creates a tracker before the first freezetime-end.
    #[must_use]
    pub const fn new(total_rounds_played: u32) -> Self {
        Self {
            round: Round {
                number: total_rounds_played.saturating_add(1),
                phase: RoundPhase::NotStarted,
                started_at: Duration::ZERO,
            },
        }
    }

    /// Starts a new round at `now`.
    pub const fn start(&mut self, total_rounds_played: u32, now: Duration) -> Round {
        self.round = Round {
            number: total_rounds_played.saturating_add(1),
            phase: RoundPhase::Active,
            started_at: now,
        };
        self.round
    }

    /// Marks the current round as over.
    pub const fn end(&mut self) {
        self.round.phase = RoundPhase::Ended;
    }

    /// The current round.
    #[must_use]
    pub const fn current(&self) -> Round {
        self.round
    }

    /// The current round number.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.round.number
    }

    /// Whether live play is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.round.phase == RoundPhase::Active
    }

    /// Time since the current round started. Zero if `now` precedes it.
    #[must_use]
    pub const fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.round.started_at)
    }
}

impl Default for RoundTracker {
    fn default() -> Self {
        Self::new(0)
    }
}
