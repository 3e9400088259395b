//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use memory_match::{BoardConfig, GameConfig, GameController, ManualScheduler, RecordingView};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize test logging once.
///
/// The level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub type TestGame = GameController<&'static str, RecordingView<&'static str>, ManualScheduler>;

/// A seeded game on a one-row board holding `identities`.
pub fn game(identities: &[&'static str], seed: u64) -> TestGame {
    init_logging();
    let board = BoardConfig::new(1, identities.len() * 2).with_seed(seed);
    GameController::new(
        GameConfig::new(board, identities.iter().copied()),
        RecordingView::new(),
        ManualScheduler::new(),
    )
    .expect("valid config")
}

/// Both board positions holding `identity`, lowest first.
pub fn positions_of(game: &TestGame, identity: &str) -> (usize, usize) {
    let found: Vec<usize> = game
        .session()
        .cards()
        .iter()
        .filter(|c| *c.identity() == identity)
        .map(|c| c.position())
        .collect();
    assert_eq!(found.len(), 2, "identity {identity} should appear twice");
    (found[0], found[1])
}

/// Fire the oldest pending mismatch timer.
pub fn fire_timer(game: &mut TestGame) -> bool {
    let timer = game.scheduler_mut().pop().expect("a timer should be pending");
    game.on_reveal_timer_elapsed(timer.ticket)
}
