//! Violation records.

use std::fmt;

use crate::game::{Player, PlayerId, Team};

/// A confirmed fixed-camera violation by a coach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Round the violation happened in.
    pub round: u32,
    /// Side the player was coaching when reported.
    pub team: Team,
    /// Display name.
    pub name: String,
    /// Stable player id.
    pub player_id: PlayerId,
}

impl Violation {
    /// Builds a record for `player`, re-checking their coaching assignment.
    ///
    /// Returns `None` if they no longer coach anyone.
    #[must_use]
    pub fn for_player(round: u32, player: &Player) -> Option<Self> {
        if !player.is_coaching() {
            return None;
        }
        Some(Self {
            round,
            team: player.coaching_team_or_default(),
            name: player.name.clone(),
            player_id: player.id,
        })
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Round: {}, Busta: [{}]{} ({})",
            self.round,
            self.team.tag(),
            self.name,
            self.player_id
        )
    }
}
