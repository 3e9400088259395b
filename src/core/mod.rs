//! Core types: RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. Games are configured via
//! `GameConfig` rather than by changing the turn logic.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{BoardConfig, GameConfig, DEFAULT_MISMATCH_DELAY, OCEAN_ANIMALS};
pub use error::{ConfigError, GameError};
pub use rng::GameRng;
