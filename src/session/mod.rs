//! Live state of one game.
//!
//! ## Phases
//!
//! ```text
//! Idle ──pick──▶ AwaitingSecond ──match──▶ Idle | Complete
//!                      │
//!                  mismatch
//!                      ▼
//!                  Resolving ──timer──▶ Idle
//! ```
//!
//! The pending first pick and the busy flag are not stored separately; both
//! are read off the current `Phase`, so they cannot disagree with it.

pub mod state;

pub use state::{GameSession, Phase};
