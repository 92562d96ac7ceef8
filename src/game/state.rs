//! Live match state (roster, round counter, clock).
//!
//! [`MatchState`] is owned and mutated by the event-log decoder. The
//! detector only sees it through the read-only [`GameState`] trait.

use std::time::Duration;

use indexmap::IndexMap;

use super::types::{Player, PlayerId, Team};

/// Read-only queries the detector makes against the live game state.
pub trait GameState {
    /// Rounds completed so far, as counted by the game rules.
    fn total_rounds_played(&self) -> u32;

    /// Current match time.
    fn current_time(&self) -> Duration;

    /// Looks up a participant by id, connected or not.
    fn player(&self, id: PlayerId) -> Option<&Player>;

    /// Participants currently connected, in connection order.
    fn connected(&self) -> Box<dyn Iterator<Item = &Player> + '_>;

    /// Connected participants whose team slot is `team`.
    fn team_members(&self, team: Team) -> Box<dyn Iterator<Item = &Player> + '_> {
        Box::new(self.connected().filter(move |p| p.team_or_default() == team))
    }
}

/// Concrete game state maintained while replaying a recording.
#[derive(Debug, Clone, Default)]
pub struct MatchState {
    players: IndexMap<PlayerId, Player>,
    total_rounds_played: u32,
    current_time: Duration,
}

impl MatchState {
    /// Creates an empty state at match time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a participant, keeping its roster position on replace.
    pub fn upsert_player(&mut self, player: Player) {
        self.players.insert(player.id, player);
    }

    /// Mutable access to a participant.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    /// Marks a participant as disconnected. Its last properties stay queryable.
    pub fn disconnect(&mut self, id: PlayerId) {
        if let Some(player) = self.players.get_mut(&id) {
            player.connected = false;
        }
    }

    /// Sets the game-rules round counter.
    pub const fn set_total_rounds_played(&mut self, total: u32) {
        self.total_rounds_played = total;
    }

    /// Advances the match clock.
    pub const fn set_current_time(&mut self, time: Duration) {
        self.current_time = time;
    }
}

impl GameState for MatchState {
    fn total_rounds_played(&self) -> u32 {
        self.total_rounds_played
    }

    fn current_time(&self) -> Duration {
        self.current_time
    }

    fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    fn connected(&self) -> Box<dyn Iterator<Item = &Player> + '_> {
        Box::new(self.players.values().filter(|p| p.connected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u64, team: Team) -> Player {
        let mut p = Player::new(PlayerId(id), format!("p{id}"));
        p.team = Some(team);
        p
    }

    #[test]
    fn test_new_state() {
        let state = MatchState::new();
        assert_eq!(state.total_rounds_played(), 0);
        assert_eq!(state.current_time(), Duration::ZERO);
        assert_eq!(state.connected().count(), 0);
    }

    #[test]
    fn test_upsert_keeps_roster_order() {
        let mut state = MatchState::new();
        state.upsert_player(player(1, Team::Terrorists));
        state.upsert_player(player(2, Team::CounterTerrorists));
        state.upsert_player(player(1, Team::Spectators));

        let ids: Vec<u64> = state.connected().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(
            state.player(PlayerId(1)).map(Player::team_or_default),
            Some(Team::Spectators)
        );
    }

    #[test]
    fn test_disconnected_player_leaves_roster_but_stays_queryable() {
        let mut state = MatchState::new();
        state.upsert_player(player(1, Team::Terrorists));
        state.upsert_player(player(2, Team::Terrorists));
        state.disconnect(PlayerId(1));

        assert_eq!(state.team_members(Team::Terrorists).count(), 1);
        assert!(state.player(PlayerId(1)).is_some_and(|p| !p.connected));
    }

    #[test]
    fn test_team_members_filters_by_team() {
        let mut state = MatchState::new();
        state.upsert_player(player(1, Team::Terrorists));
        state.upsert_player(player(2, Team::CounterTerrorists));
        state.upsert_player(player(3, Team::Terrorists));
        state.upsert_player(Player::new(PlayerId(4), "no team"));

        let t: Vec<u64> = state.team_members(Team::Terrorists).map(|p| p.id.0).collect();
        assert_eq!(t, vec![1, 3]);
        assert_eq!(state.team_members(Team::Unassigned).count(), 1);
    }

    #[test]
    fn test_clock_and_round_counter() {
        let mut state = MatchState::new();
        state.set_current_time(Duration::from_millis(1500));
        state.set_total_rounds_played(4);
        assert_eq!(state.current_time(), Duration::from_millis(1500));
        assert_eq!(state.total_rounds_played(), 4);
    }
}
