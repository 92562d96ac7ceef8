//! Game-state model
//!
//! The queryable view of a match that the detector reads: participants with
//! their team, coaching, life and camera properties, the round counter and
//! the match clock.

pub mod state;
pub mod types;

pub use state::{GameState, MatchState};
pub use types::{ObserverMode, Player, PlayerId, Team};
