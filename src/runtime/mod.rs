//! Tokio driver for hosts on a multi-threaded executor.
//!
//! All session access is serialized through one task. Clicks and expired
//! mismatch timers arrive on channels and are handled one at a time, so a
//! click can never interleave with the deferred flip-back.
//!
//! ```no_run
//! use memory_match::core::GameConfig;
//! use memory_match::runtime::GameRuntime;
//! use memory_match::view::RecordingView;
//!
//! # async fn demo() -> Result<(), memory_match::core::GameError> {
//! let view = RecordingView::<&str>::new();
//! let (runtime, handle) = GameRuntime::new(GameConfig::ocean_animals(), view)?;
//! let game = runtime.spawn();
//!
//! handle.click(0).await.ok();
//! handle.click(1).await.ok();
//! drop(handle);
//!
//! let controller = game.await.expect("game task panicked")?;
//! println!("{} pairs left", controller.session().remaining_pairs());
//! # Ok(())
//! # }
//! ```

mod channel_view;
pub mod driver;
pub mod scheduler;

pub use driver::{GameHandle, GameRuntime, RuntimeController};
pub use scheduler::{TimerHandle, TokioScheduler};
