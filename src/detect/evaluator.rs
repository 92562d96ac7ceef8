//! Camera-mode transition policy.
//!
//! Decides, for one observer-mode change, whether the spectator should be
//! flagged, have an earlier flag retracted, or be left alone.

use std::time::Duration;

use crate::game::{GameState, ObserverMode, PlayerId, Team};

use super::round::RoundTracker;

/// Outcome of evaluating a camera-mode change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Add the player to the suspect set.
    Flag,
    /// Remove the player from the suspect set.
    Retract,
    /// Leave the suspect set unchanged.
    Ignore,
}

/// Evaluates a change of `player`'s camera to `mode`.
///
/// Only spectators are considered. Switching to in-eye within `in_eye_grace`
/// of round start (or outside a round) retracts a flag; switching to fixed
/// flags the player unless they coach a playing side whose members are all
/// dead. The roster is read at call time only.
pub fn evaluate<G: GameState + ?Sized>(
    game: &G,
    round: &RoundTracker,
    in_eye_grace: Duration,
    player: PlayerId,
    mode: ObserverMode,
) -> Transition {
    let Some(observer) = game.player(player) else {
        return Transition::Ignore;
    };

    if observer.team_or_default() != Team::Spectators {
        return Transition::Ignore;
    }

    let coaching_team = observer.coaching_team_or_default();

    match mode {
        ObserverMode::InEye => {
            if !round.is_active() || round.elapsed(game.current_time()) < in_eye_grace {
                Transition::Retract
            } else {
                Transition::Ignore
            }
        }
        ObserverMode::Fixed => {
            let all_team_dead = game.team_members(coaching_team).all(|p| !p.alive);
            if all_team_dead && coaching_team.is_playing_side() {
                Transition::Ignore
            } else {
                Transition::Flag
            }
        }
        _ => Transition::Ignore,
    }
}
