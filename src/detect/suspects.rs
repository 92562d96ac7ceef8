//! Set of coaches currently suspected of holding a fixed camera.

use indexmap::IndexSet;

use crate::game::PlayerId;

/// Players flagged during the current round, in the order they were flagged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuspectSet {
    players: IndexSet<PlayerId>,
}

impl SuspectSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags a player. Returns `false` if they were already flagged.
    pub fn insert(&mut self, player: PlayerId) -> bool {
        self.players.insert(player)
    }

    /// Retracts a flag. Returns `false` if the player was not flagged.
    pub fn remove(&mut self, player: PlayerId) -> bool {
        self.players.shift_remove(&player)
    }

    /// Whether the player is flagged.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.players.contains(&player)
    }

    /// Removes every flag and returns them in flag order.
    pub fn drain(&mut self) -> Vec<PlayerId> {
        self.players.drain(..).collect()
    }

    /// Removes every flag.
    pub fn clear(&mut self) {
        self.players.clear();
    }

    /// Number of flagged players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether nobody is flagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Flagged players in flag order.
    pub fn iter(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().copied()
    }
}
