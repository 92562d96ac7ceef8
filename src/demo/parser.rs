//! Pull-based event log parser.
//!
//! [`DemoParser`] replays a log line by line, keeps the [`MatchState`] up to
//! date, and hands match events to its caller one at a time. Records that only
//! mutate state are consumed silently.

use std::collections::HashSet;
use std::io::BufRead;
use std::time::Duration;

use tracing::trace;

use crate::error::DecodeError;
use crate::game::{GameState, MatchState, PlayerId};

use super::record::{Property, Record, decode_record};

/// Match events delivered to the analysis, in log order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    /// The freeze period ended; the round is live.
    RoundFreezetimeEnd,
    /// The round ended.
    RoundEnd,
    /// A participant left. It is still on the roster while this event is
    /// handled and is removed before the next one is produced.
    PlayerDisconnected(PlayerId),
    /// A subscribed property changed. The state already holds the new value.
    PropertyChanged {
        /// Player whose entity changed.
        player: PlayerId,
        /// Property that changed.
        property: Property,
        /// New raw value.
        value: i64,
    },
}

/// Event log parser over any buffered reader.
pub struct DemoParser<R> {
    reader: R,
    state: MatchState,
    subscriptions: HashSet<Property>,
    buf: String,
    line: usize,
    last_time_ms: u64,
    pending_disconnect: Option<PlayerId>,
}

impl<R: BufRead> DemoParser<R> {
    /// Creates a parser at the start of the log with an empty match state.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            state: MatchState::new(),
            subscriptions: HashSet::new(),
            buf: String::new(),
            line: 0,
            last_time_ms: 0,
            pending_disconnect: None,
        }
    }

    /// Requests [`MatchEvent::PropertyChanged`] for updates of `property`.
    pub fn subscribe(&mut self, property: Property) {
        self.subscriptions.insert(property);
    }

    /// The live match state as of the last produced event.
    #[must_use]
    pub const fn state(&self) -> &MatchState {
        &self.state
    }

    /// Number of log lines read so far.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Reads ahead to the next match event.
    ///
    /// Returns `Ok(None)` at the end of the log.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] on the first line that cannot be read,
    /// decoded, or applied. The parser must not be used after an error.
    pub fn next_event(&mut self) -> Result<Option<MatchEvent>, DecodeError> {
        if let Some(id) = self.pending_disconnect.take() {
            self.state.disconnect(id);
        }

        loop {
            self.buf.clear();
            let read = self
                .reader
                .read_line(&mut self.buf)
                .map_err(|source| DecodeError::Read {
                    line: self.line,
                    source,
                })?;
            if read == 0 {
                return Ok(None);
            }
            self.line += 1;

            let text = self.buf.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let record = decode_record(text, self.line)?;
            if let Some(event) = self.apply(record)? {
                return Ok(Some(event));
            }
        }
    }

    fn apply(&mut self, record: Record) -> Result<Option<MatchEvent>, DecodeError> {
        let line = self.line;
        let time_ms = record.time_ms();
        if time_ms < self.last_time_ms {
            return Err(DecodeError::TimeWentBackwards {
                line,
                time_ms,
                previous_ms: self.last_time_ms,
            });
        }
        self.last_time_ms = time_ms;
        self.state.set_current_time(Duration::from_millis(time_ms));

        match record {
            Record::PlayerConnect { player, .. } => {
                trace!(line, player = %player.id, name = %player.name, "player connected");
                self.state.upsert_player(player.into_player());
                Ok(None)
            }
            Record::PropertyUpdate {
                player,
                property,
                value,
                ..
            } => {
                let target = self
                    .state
                    .player_mut(player)
                    .ok_or(DecodeError::UnknownPlayer {
                        line,
                        player: player.0,
                    })?;
                property.apply(target, value);

                if self.subscriptions.contains(&property) {
                    Ok(Some(MatchEvent::PropertyChanged {
                        player,
                        property,
                        value,
                    }))
                } else {
                    Ok(None)
                }
            }
            Record::RoundsPlayed { total, .. } => {
                self.state.set_total_rounds_played(total);
                Ok(None)
            }
            Record::FreezetimeEnd { .. } => Ok(Some(MatchEvent::RoundFreezetimeEnd)),
            Record::RoundEnd { .. } => Ok(Some(MatchEvent::RoundEnd)),
            Record::PlayerDisconnect { player, .. } => {
                if self.state.player(player).is_none() {
                    return Err(DecodeError::UnknownPlayer {
                        line,
                        player: player.0,
                    });
                }
                self.pending_disconnect = Some(player);
                Ok(Some(MatchEvent::PlayerDisconnected(player)))
            }
        }
    }
}

impl<R> std::fmt::Debug for DemoParser<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoParser")
            .field("line", &self.line)
            .field("last_time_ms", &self.last_time_ms)
            .field("subscriptions", &self.subscriptions)
            .finish_non_exhaustive()
    }
}
