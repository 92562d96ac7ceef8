//! Match event log decoder
//!
//! Replays a recording that has already been decoded into a JSONL event log.
//! The decoder owns the live [`MatchState`](crate::game::MatchState) and
//! produces match events in chronological order.
//!
//! # Architecture
//!
//! - [`record`] — Line format and per-line decoding
//! - [`DemoParser`] — Applies records to the match state and yields [`MatchEvent`]s

pub mod parser;
pub mod record;

pub use parser::{DemoParser, MatchEvent};
pub use record::{PlayerInfo, Property, Record};
