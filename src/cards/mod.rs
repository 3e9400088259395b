//! Card system: cards, the dealt deck, and deck generation.
//!
//! ## Key Types
//!
//! - `Card`: identity, fixed board position, and face state
//! - `FaceState`: Hidden, Revealed, or Matched
//! - `Deck`: immutable ordered identities, two of each
//! - `DeckGenerator`: validates an identity set and shuffles the pairs
//!
//! Identities are opaque: any `Clone + Eq + Hash` value works, from image
//! file names to small integers.

pub mod card;
pub mod deck;
pub mod generator;

pub use card::{Card, FaceState};
pub use deck::Deck;
pub use generator::DeckGenerator;
