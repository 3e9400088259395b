//! Cards on the board.
//!
//! A `Card` is created once per game at deal time. Its identity and position
//! never change; only its face moves between states:
//!
//! ```text
//! Hidden ──reveal──▶ Revealed ──match──▶ Matched (terminal)
//!    ▲                  │
//!    └──────hide────────┘  (mismatch resolved)
//! ```

use serde::{Deserialize, Serialize};

/// Which side of a card is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceState {
    /// Face-down.
    #[default]
    Hidden,
    /// Face-up, part of the current turn.
    Revealed,
    /// Face-up for good; no longer selectable.
    Matched,
}

/// A card at a fixed board position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card<V> {
    identity: V,
    position: usize,
    face: FaceState,
}

impl<V> Card<V> {
    /// Create a face-down card.
    pub fn new(identity: V, position: usize) -> Self {
        Self {
            identity,
            position,
            face: FaceState::Hidden,
        }
    }

    /// The value this card shares with its partner.
    pub fn identity(&self) -> &V {
        &self.identity
    }

    /// Board position, assigned at deal time.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current face state.
    #[must_use]
    pub fn face(&self) -> FaceState {
        self.face
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.face == FaceState::Matched
    }

    pub(crate) fn reveal(&mut self) {
        debug_assert_eq!(self.face, FaceState::Hidden, "only hidden cards are revealed");
        self.face = FaceState::Revealed;
    }

    pub(crate) fn hide(&mut self) {
        debug_assert_eq!(self.face, FaceState::Revealed, "only revealed cards are hidden");
        self.face = FaceState::Hidden;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face = FaceState::Matched;
    }
}
