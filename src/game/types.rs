//! Typed views over the raw integer values carried by the recording.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable match-assigned player identity (the 64-bit account id).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team assignment, as used for both the team and coaching-team properties.
///
/// Unrecognized raw values are kept so they can be reported as `UNKNOWN`
/// instead of being folded into a known side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum Team {
    /// No team; as a coaching team this means "not coaching".
    #[default]
    Unassigned,
    /// Spectator slot.
    Spectators,
    /// Terrorist side.
    Terrorists,
    /// Counter-terrorist side.
    CounterTerrorists,
    /// Any other raw value.
    Unknown(i64),
}

impl Team {
    /// Maps a raw network value to a team.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Self::Unassigned,
            1 => Self::Spectators,
            2 => Self::Terrorists,
            3 => Self::CounterTerrorists,
            other => Self::Unknown(other),
        }
    }

    /// Tag used in violation lines.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Unassigned => "UNASSIGNED",
            Self::Spectators => "SPEC",
            Self::Terrorists => "T",
            Self::CounterTerrorists => "CT",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    /// Whether this is one of the two playing sides.
    #[must_use]
    pub const fn is_playing_side(self) -> bool {
        matches!(self, Self::Terrorists | Self::CounterTerrorists)
    }
}

/// Spectator camera mode.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum ObserverMode {
    /// Not spectating.
    #[default]
    None,
    /// Death-cam animation.
    DeathCam,
    /// Zoom to a target and freeze-frame.
    FreezeCam,
    /// Static camera position. Restricted for coaches.
    Fixed,
    /// First-person follow.
    InEye,
    /// Third-person follow.
    Chase,
    /// Free roaming.
    Roaming,
    /// Any other raw value.
    Unknown(i64),
}

impl ObserverMode {
    /// Maps a raw network value to an observer mode.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::DeathCam,
            2 => Self::FreezeCam,
            3 => Self::Fixed,
            4 => Self::InEye,
            5 => Self::Chase,
            6 => Self::Roaming,
            other => Self::Unknown(other),
        }
    }
}

/// A match participant as seen by the game state.
///
/// Optional fields model properties the recording has not (yet) carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Stable identity.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Current team slot.
    pub team: Option<Team>,
    /// Side currently coached.
    pub coaching_team: Option<Team>,
    /// Alive/dead status.
    pub alive: bool,
    /// Current camera mode.
    pub observer_mode: Option<ObserverMode>,
    /// Whether the player is still in the match.
    pub connected: bool,
}

impl Player {
    /// Creates a connected player with every property absent.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            team: None,
            coaching_team: None,
            alive: false,
            observer_mode: None,
            connected: true,
        }
    }

    /// Team slot, `Unassigned` when absent.
    #[must_use]
    pub fn team_or_default(&self) -> Team {
        self.team.unwrap_or_default()
    }

    /// Coached side, `Unassigned` (not coaching) when absent.
    #[must_use]
    pub fn coaching_team_or_default(&self) -> Team {
        self.coaching_team.unwrap_or_default()
    }

    /// Whether the player currently holds any coaching assignment.
    #[must_use]
    pub fn is_coaching(&self) -> bool {
        self.coaching_team_or_default() != Team::Unassigned
    }
}
