//! # memory-match
//!
//! Turn logic for a single-player tile-matching memory game.
//!
//! A grid of face-down cards is dealt; the player reveals two per turn
//! looking for identical pairs. Matches stay face-up and disabled,
//! mismatches flip back after a delay, and the game ends when every pair
//! is found.
//!
//! ## Design Principles
//!
//! 1. **View-Agnostic**: The controller emits rendering instructions through
//!    `BoardView`; it never owns widgets, images, or a window.
//!
//! 2. **Explicit State**: All live state sits in one `GameSession` owned by
//!    `GameController`. No globals.
//!
//! 3. **Deterministic When Asked**: Deals come from a seeded ChaCha RNG.
//!    Entropy-seeded games log their seed so they can be replayed.
//!
//! ## Architecture
//!
//! - **Deferred Resolution**: A mismatch hands a `ResolutionTicket` to a
//!   `Scheduler`. The host returns it through
//!   `GameController::on_reveal_timer_elapsed` once the delay has passed.
//!
//! - **Serialized Entry Points**: Clicks and timer expiries both need
//!   `&mut GameController`. On a multi-threaded executor, `runtime` funnels
//!   them through a single task.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Cards, the dealt deck, deck generation
//! - `session`: Live game state and phases
//! - `view`: Outbound rendering instructions
//! - `timer`: Scheduling of the mismatch flip-back
//! - `controller`: The turn state machine
//! - `runtime`: Tokio driver (feature `runtime`)
//!
//! ## Example
//!
//! ```
//! use memory_match::{
//!     BoardConfig, GameConfig, GameController, ManualScheduler, RecordingView, SelectionOutcome,
//! };
//!
//! let config = GameConfig::new(BoardConfig::new(2, 2).with_seed(1), ["crab", "shark"]);
//! let view = RecordingView::<&str>::new();
//! let mut game = GameController::new(config, view, ManualScheduler::new())?;
//!
//! assert_eq!(game.handle_selection(0)?, SelectionOutcome::FirstPick);
//! assert_eq!(game.view().last_message(), Some("Now select another card."));
//! # Ok::<(), memory_match::GameError>(())
//! ```

pub mod cards;
pub mod controller;
pub mod core;
pub mod session;
pub mod timer;
pub mod view;

#[cfg(feature = "runtime")]
pub mod runtime;

// Re-export commonly used types
pub use crate::core::{BoardConfig, ConfigError, GameConfig, GameError, GameRng, OCEAN_ANIMALS};

pub use crate::cards::{Card, Deck, DeckGenerator, FaceState};

pub use crate::session::{GameSession, Phase};

pub use crate::view::{BoardView, RecordingView, ViewCommand};

pub use crate::timer::{ManualScheduler, ResolutionTicket, ScheduledTimer, Scheduler};

pub use crate::controller::{GameController, SelectionOutcome};

#[cfg(feature = "runtime")]
pub use crate::runtime::{GameHandle, GameRuntime, TokioScheduler};
