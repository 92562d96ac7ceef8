//! Fixed-camera violation detection
//!
//! Tracks rounds, keeps a provisional set of suspected coaches, and confirms
//! or drops suspicion when rounds end or suspects disconnect.
//!
//! # Architecture
//!
//! - [`RoundTracker`] — Round number, live flag, start time
//! - [`SuspectSet`] — Coaches flagged in the current round
//! - [`evaluator`] — Policy for a single camera-mode change
//! - [`Violation`] — Confirmed record and its report line
//! - [`Detector`] — Event handlers tying the above together

pub mod detector;
pub mod evaluator;
pub mod round;
pub mod suspects;
pub mod violation;

pub use detector::{DISCONNECT_GRACE, Detector, DetectorConfig, IN_EYE_GRACE};
pub use evaluator::Transition;
pub use round::{Round, RoundPhase, RoundTracker};
pub use suspects::SuspectSet;
pub use violation::Violation;
