//! Game configuration types.
//!
//! Hosts configure a game at construction by providing:
//! - `BoardConfig`: grid shape, mismatch delay, and an optional seed
//! - `GameConfig`: the board plus the set of card identities
//!
//! Validation is strict: a board that cannot be filled with exactly two
//! copies of each identity is rejected before any card is dealt.

use std::hash::Hash;
use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Delay before mismatched cards flip back in the reference game.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(800);

/// Identities of the reference "Ocean Animals" game (10 pairs on a 4 × 5 grid).
pub const OCEAN_ANIMALS: [&str; 10] = [
    "dolphin",
    "turtle",
    "clownfish",
    "shark",
    "octopus",
    "jellyfish",
    "seahorse",
    "crab",
    "stingray",
    "starfish",
];

/// Shape and timing of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows in the grid.
    pub rows: usize,

    /// Number of columns in the grid.
    pub columns: usize,

    /// How long a mismatched pair stays face-up before flipping back.
    #[serde(default = "default_mismatch_delay")]
    pub mismatch_delay: Duration,

    /// Seed for the deal. `None` draws one from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            columns: 5,
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Create a board with the given grid shape and default timing.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Fix the deal to a seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of cards on the board.
    ///
    /// Fails with `ConfigError::BoardTooLarge` if the grid does not fit in a `usize`.
    pub fn card_count(&self) -> Result<usize, ConfigError> {
        self.rows
            .checked_mul(self.columns)
            .ok_or(ConfigError::BoardTooLarge {
                rows: self.rows,
                columns: self.columns,
            })
    }

    /// Number of pairs on the board.
    pub fn pair_count(&self) -> Result<usize, ConfigError> {
        self.card_count().map(|cards| cards / 2)
    }

    /// Row-major `(row, column)` of a card index.
    #[must_use]
    pub fn coordinates(&self, index: usize) -> Option<(usize, usize)> {
        let cards = self.card_count().ok()?;
        (index < cards).then(|| (index / self.columns, index % self.columns))
    }

    /// Card index at `(row, column)`.
    #[must_use]
    pub fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        self.card_count().ok()?;
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    /// Check the board can hold whole pairs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_card_count(self.card_count()?)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig<V> {
    /// Board shape and timing.
    pub board: BoardConfig,

    /// Distinct card identities; each is dealt exactly twice.
    pub identities: Vec<V>,
}

impl<V> GameConfig<V> {
    /// Create a game configuration.
    pub fn new(board: BoardConfig, identities: impl IntoIterator<Item = V>) -> Self {
        Self {
            board,
            identities: identities.into_iter().collect(),
        }
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.board.mismatch_delay = delay;
        self
    }

    /// Fix the deal to a seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.board.seed = Some(seed);
        self
    }
}

impl<V: Eq + Hash> GameConfig<V> {
    /// Check the identity set exactly fills the board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_identities(&self.identities, self.board.card_count()?)
    }
}

impl GameConfig<&'static str> {
    /// The reference game: ten ocean animals on a 4 × 5 board.
    #[must_use]
    pub fn ocean_animals() -> Self {
        Self::new(BoardConfig::default(), OCEAN_ANIMALS)
    }
}

fn default_mismatch_delay() -> Duration {
    DEFAULT_MISMATCH_DELAY
}

fn validate_card_count(cards: usize) -> Result<(), ConfigError> {
    if cards == 0 {
        return Err(ConfigError::EmptyBoard);
    }
    if cards % 2 != 0 {
        return Err(ConfigError::OddCardCount { cards });
    }
    Ok(())
}

/// Check that `identities` are distinct and fill `cards` cells in pairs.
pub(crate) fn validate_identities<V: Eq + Hash>(
    identities: &[V],
    cards: usize,
) -> Result<(), ConfigError> {
    validate_card_count(cards)?;

    if identities.len() * 2 != cards {
        return Err(ConfigError::IdentityCountMismatch {
            identities: identities.len(),
            cards,
        });
    }

    let mut seen = FxHashSet::default();
    for (position, identity) in identities.iter().enumerate() {
        if !seen.insert(identity) {
            return Err(ConfigError::DuplicateIdentity { position });
        }
    }

    Ok(())
}
