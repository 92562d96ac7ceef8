//! `coachwatch` - fixed-camera coaching violation detector
//!
//! Replays a recorded match event log and reports coaches who switched their
//! spectator camera to a fixed position while the team they coach still had
//! living players.

pub mod analysis;
pub mod cli;
pub mod demo;
pub mod detect;
pub mod error;
pub mod game;
pub mod observability;
pub mod report;
