//! Violation detector orchestration.
//!
//! The `Detector` owns the round tracker and suspect set and exposes one
//! handler per match event. Handlers never fail; they return the violations
//! the event confirmed.

use std::time::Duration;

use tracing::{debug, info};

use crate::game::{GameState, ObserverMode, PlayerId};

use super::evaluator::{self, Transition};
use super::round::RoundTracker;
use super::suspects::SuspectSet;
use super::violation::Violation;

/// Window after round start in which switching to in-eye retracts a flag.
pub const IN_EYE_GRACE: Duration = Duration::from_millis(500);

/// Window after round start in which a flagged player's disconnect is not reported.
pub const DISCONNECT_GRACE: Duration = Duration::from_secs(10);

/// Timing thresholds for the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorConfig {
    /// See [`IN_EYE_GRACE`].
    pub in_eye_grace: Duration,
    /// See [`DISCONNECT_GRACE`].
    pub disconnect_grace: Duration,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            in_eye_grace: IN_EYE_GRACE,
            disconnect_grace: DISCONNECT_GRACE,
        }
    }
}

/// Fixed-camera violation detector.
///
/// Coordinates:
/// - Round boundaries and timing via [`RoundTracker`]
/// - Seeding suspects still holding a fixed camera at round start
/// - Camera-mode transitions via [`evaluator::evaluate`]
/// - Confirmation at round end and on disconnect
#[derive(Debug, Clone)]
pub struct Detector {
    config: DetectorConfig,
    round: RoundTracker,
    suspects: SuspectSet,
}

impl Detector {
    /// Creates a detector positioned before the first round.
    #[must_use]
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            round: RoundTracker::default(),
            suspects: SuspectSet::new(),
        }
    }

    /// The thresholds in use.
    #[must_use]
    pub const fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// The current round.
    #[must_use]
    pub const fn round(&self) -> &RoundTracker {
        &self.round
    }

    /// Players currently flagged.
    #[must_use]
    pub const fn suspects(&self) -> &SuspectSet {
        &self.suspects
    }

    /// Handles freezetime-end.
    ///
    /// Starts a new round and reseeds the suspect set with coaches whose camera
    /// is already fixed, since they held it through the freeze period.
    pub fn on_round_start<G: GameState + ?Sized>(&mut self, game: &G) {
        let round = self
            .round
            .start(game.total_rounds_played(), game.current_time());
        self.suspects.clear();

        for player in game.connected() {
            if !player.is_coaching() {
                continue;
            }
            if player.observer_mode == Some(ObserverMode::Fixed) {
                debug!(
                    round = round.number,
                    player = %player.id,
                    name = %player.name,
                    "coach entered round with fixed camera"
                );
                self.suspects.insert(player.id);
            }
        }

        info!(round = round.number, suspects = self.suspects.len(), "round started");
    }

    /// Handles round-end.
    ///
    /// Reports every suspect still coaching and empties the suspect set.
    pub fn on_round_end<G: GameState + ?Sized>(&mut self, game: &G) -> Vec<Violation> {
        self.round.end();
        let number = self.round.number();

        let violations: Vec<Violation> = self
            .suspects
            .drain()
            .into_iter()
            .filter_map(|id| {
                let violation = game
                    .player(id)
                    .and_then(|p| Violation::for_player(number, p));
                if violation.is_none() {
                    debug!(round = number, player = %id, "suspect no longer coaching; dropped");
                }
                violation
            })
            .collect();

        info!(round = number, violations = violations.len(), "round ended");
        violations
    }

    /// Handles a player disconnect.
    ///
    /// A flagged player leaves the suspect set either way. They are reported
    /// only if the round is live, past the disconnect grace window, and they
    /// still coach.
    pub fn on_disconnect<G: GameState + ?Sized>(
        &mut self,
        game: &G,
        player: PlayerId,
    ) -> Option<Violation> {
        if !self.suspects.remove(player) {
            return None;
        }

        let elapsed = self.round.elapsed(game.current_time());
        if !self.round.is_active() || elapsed < self.config.disconnect_grace {
            debug!(
                round = self.round.number(),
                player = %player,
                elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                "suspect disconnected inside grace window; not reported"
            );
            return None;
        }

        game.player(player)
            .and_then(|p| Violation::for_player(self.round.number(), p))
    }

    /// Handles an observer-mode change notification.
    pub fn on_camera_mode_change<G: GameState + ?Sized>(
        &mut self,
        game: &G,
        player: PlayerId,
        mode: ObserverMode,
    ) {
        match evaluator::evaluate(game, &self.round, self.config.in_eye_grace, player, mode) {
            Transition::Flag => {
                if self.suspects.insert(player) {
                    debug!(round = self.round.number(), player = %player, "fixed camera; flagged");
                }
            }
            Transition::Retract => {
                if self.suspects.remove(player) {
                    debug!(
                        round = self.round.number(),
                        player = %player,
                        "in-eye camera; flag retracted"
                    );
                }
            }
            Transition::Ignore => {}
        }
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}
