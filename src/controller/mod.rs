//! Turn logic for the memory game.
//!
//! `GameController` owns the session and runs the turn state machine:
//! - Clicks arrive through `handle_selection`
//! - Rendering instructions go out through a `BoardView`
//! - Mismatches are resolved later through a `Scheduler`

mod game;
pub mod messages;

pub use game::{GameController, SelectionOutcome};
