//! Match event log records.
//!
//! One JSON object per line, tagged by `"type"`. Every record carries the
//! match time it happened at in `time_ms`.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::game::{ObserverMode, Player, PlayerId, Team};

/// Every record type tag the decoder understands.
pub const RECORD_TYPES: [&str; 6] = [
    "player_connect",
    "property_update",
    "rounds_played",
    "freezetime_end",
    "round_end",
    "player_disconnect",
];

/// A single decoded line of the event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    /// A participant joined, or its full property set was re-sent.
    PlayerConnect {
        /// Match time in milliseconds.
        time_ms: u64,
        /// Participant snapshot.
        player: PlayerInfo,
    },

    /// A single player property changed.
    PropertyUpdate {
        /// Match time in milliseconds.
        time_ms: u64,
        /// Player whose entity changed.
        player: PlayerId,
        /// Which property changed.
        property: Property,
        /// New raw value.
        value: i64,
    },

    /// The game rules' completed-round counter changed.
    RoundsPlayed {
        /// Match time in milliseconds.
        time_ms: u64,
        /// Rounds completed so far.
        total: u32,
    },

    /// Freeze period ended and live play began.
    FreezetimeEnd {
        /// Match time in milliseconds.
        time_ms: u64,
    },

    /// The round ended.
    RoundEnd {
        /// Match time in milliseconds.
        time_ms: u64,
    },

    /// A participant left the match.
    PlayerDisconnect {
        /// Match time in milliseconds.
        time_ms: u64,
        /// Player who left.
        player: PlayerId,
    },
}

impl Record {
    /// Match time carried by the record, in milliseconds.
    #[must_use]
    pub const fn time_ms(&self) -> u64 {
        match self {
            Self::PlayerConnect { time_ms, .. }
            | Self::PropertyUpdate { time_ms, .. }
            | Self::RoundsPlayed { time_ms, .. }
            | Self::FreezetimeEnd { time_ms }
            | Self::RoundEnd { time_ms }
            | Self::PlayerDisconnect { time_ms, .. } => *time_ms,
        }
    }
}

/// Participant snapshot carried by `player_connect`.
///
/// Raw property values use the engine's integer encoding; a missing field
/// means the property has not been networked yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// Stable player id.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Raw team slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<i64>,
    /// Raw coached side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coaching_team: Option<i64>,
    /// Whether the player is alive.
    #[serde(default)]
    pub alive: bool,
    /// Raw camera mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observer_mode: Option<i64>,
}

impl PlayerInfo {
    /// Converts the snapshot into a connected game-state player.
    #[must_use]
    pub fn into_player(self) -> Player {
        Player {
            id: self.id,
            name: self.name,
            team: self.team.map(Team::from_raw),
            coaching_team: self.coaching_team.map(Team::from_raw),
            alive: self.alive,
            observer_mode: self.observer_mode.map(ObserverMode::from_raw),
            connected: true,
        }
    }
}

/// Player entity properties the log can update.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Team slot.
    Team,
    /// Coached side.
    CoachingTeam,
    /// Spectator camera mode.
    ObserverMode,
    /// Life state; non-zero is alive.
    Alive,
}

impl Property {
    /// Writes a raw value into the matching field of `player`.
    pub fn apply(self, player: &mut Player, value: i64) {
        match self {
            Self::Team => player.team = Some(Team::from_raw(value)),
            Self::CoachingTeam => player.coaching_team = Some(Team::from_raw(value)),
            Self::ObserverMode => player.observer_mode = Some(ObserverMode::from_raw(value)),
            Self::Alive => player.alive = value != 0,
        }
    }
}

/// Decodes one non-blank log line.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] for invalid JSON or missing fields and
/// [`DecodeError::UnknownRecord`] for an unrecognized type tag.
pub fn decode_record(text: &str, line: usize) -> Result<Record, DecodeError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| DecodeError::Malformed {
            line,
            message: e.to_string(),
        })?;

    let Some(kind) = value.get("type").and_then(serde_json::Value::as_str) else {
        return Err(DecodeError::Malformed {
            line,
            message: "missing string field \"type\"".to_string(),
        });
    };

    if !RECORD_TYPES.contains(&kind) {
        return Err(DecodeError::UnknownRecord {
            line,
            kind: kind.to_string(),
            suggestion: suggest_record_type(kind),
        });
    }

    serde_json::from_value(value).map_err(|e| DecodeError::Malformed {
        line,
        message: e.to_string(),
    })
}

/// Suggests the closest known record type for a misspelled tag.
///
/// Returns a match only if its Damerau-Levenshtein distance is at most 3.
#[must_use]
pub fn suggest_record_type(input: &str) -> Option<String> {
    RECORD_TYPES
        .iter()
        .map(|name| (*name, strsim::damerau_levenshtein(input, name)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_player_connect_with_defaults() {
        let record = decode_record(
            r#"{"type":"player_connect","time_ms":0,"player":{"id":42,"name":"coach"}}"#,
            1,
        )
        .unwrap();

        let Record::PlayerConnect { player, .. } = record else {
            panic!("expected player_connect");
        };
        let player = player.into_player();
        assert_eq!(player.id, PlayerId(42));
        assert_eq!(player.team, None);
        assert_eq!(player.coaching_team, None);
        assert!(!player.alive);
        assert!(player.connected);
    }

    #[test]
    fn decodes_property_update() {
        let record = decode_record(
            r#"{"type":"property_update","time_ms":1500,"player":7,"property":"observer_mode","value":3}"#,
            3,
        )
        .unwrap();
        assert_eq!(
            record,
            Record::PropertyUpdate {
                time_ms: 1500,
                player: PlayerId(7),
                property: Property::ObserverMode,
                value: 3,
            }
        );
        assert_eq!(record.time_ms(), 1500);
    }

    #[test]
    fn unknown_type_gets_suggestion() {
        let err = decode_record(r#"{"type":"round_ned","time_ms":1}"#, 9).unwrap_err();
        match err {
            DecodeError::UnknownRecord {
                line,
                kind,
                suggestion,
            } => {
                assert_eq!(line, 9);
                assert_eq!(kind, "round_ned");
                assert_eq!(suggestion.as_deref(), Some("round_end"));
            }
            other => panic!("expected UnknownRecord, got {other:?}"),
        }
    }

    #[test]
    fn far_off_type_has_no_suggestion() {
        assert_eq!(suggest_record_type("bomb_planted_by_someone"), None);
    }

    #[test]
    fn missing_type_is_malformed() {
        let err = decode_record(r#"{"time_ms":1}"#, 2).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { line: 2, .. }));
    }

    #[test]
    fn missing_field_is_malformed() {
        let err = decode_record(r#"{"type":"rounds_played","time_ms":1}"#, 5).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { line: 5, .. }));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = decode_record("{not json", 1).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed { line: 1, .. }));
    }

    #[test]
    fn property_apply_sets_fields() {
        let mut player = Player::new(PlayerId(1), "p");
        Property::Team.apply(&mut player, 1);
        Property::CoachingTeam.apply(&mut player, 3);
        Property::ObserverMode.apply(&mut player, 4);
        Property::Alive.apply(&mut player, 1);

        assert_eq!(player.team, Some(Team::Spectators));
        assert_eq!(player.coaching_team, Some(Team::CounterTerrorists));
        assert_eq!(player.observer_mode, Some(ObserverMode::InEye));
        assert!(player.alive);

        Property::Alive.apply(&mut player, 0);
        assert!(!player.alive);
    }

    #[test]
    fn serialized_record_uses_snake_case_tag() {
        let json = serde_json::to_value(Record::FreezetimeEnd { time_ms: 10 }).unwrap();
        assert_eq!(json["type"], "freezetime_end");
        assert_eq!(json["time_ms"], 10);
    }
}
