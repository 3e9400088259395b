//! Error types.
//!
//! Two kinds of failure exist:
//! - `ConfigError`: the board or identity set cannot produce a valid deck.
//!   Raised at construction; no game starts.
//! - `GameError::IndexOutOfRange`: a caller selected a position that is not
//!   on the board. This is a bug in the view layer, never a player action.
//!
//! Everything else a player can do (clicking a matched card, the same card
//! twice, or clicking while cards flip back) is a defined no-op.

use thiserror::Error;

/// Invalid board or identity configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The board has no cells.
    #[error("board must contain at least one pair of cards")]
    EmptyBoard,

    /// The grid has more cells than a `usize` can count.
    #[error("board of {rows} rows by {columns} columns is too large")]
    BoardTooLarge { rows: usize, columns: usize },

    /// Cards can only be dealt in pairs.
    #[error("board has {cards} cards; the card count must be even")]
    OddCardCount { cards: usize },

    /// Each identity fills exactly two cells.
    #[error(
        "{identities} identities cannot fill a board of {cards} cards; each identity fills two"
    )]
    IdentityCountMismatch { identities: usize, cards: usize },

    /// An identity was supplied more than once.
    #[error("identity at position {position} duplicates an earlier identity")]
    DuplicateIdentity { position: usize },
}

/// Errors returned by the game controller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Contract violation: the index does not name a card on this board.
    #[error("card index {index} is out of range for a board of {cards} cards")]
    IndexOutOfRange { index: usize, cards: usize },
}
