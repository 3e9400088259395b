//! The dealt deck.
//!
//! A `Deck` is the ordered sequence of identities assigned to board
//! positions for one game: position `i` holds `deck[i]`. It is built once by
//! `DeckGenerator` and never changes afterwards.

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Ordered identities, two copies of each.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck<V> {
    identities: Vec<V>,
}

impl<V> Deck<V> {
    pub(crate) fn from_vec(identities: Vec<V>) -> Self {
        Self { identities }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Number of pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.identities.len() / 2
    }

    /// Identity at a board position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&V> {
        self.identities.get(position)
    }

    /// Identities in board order.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.identities.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[V] {
        &self.identities
    }
}

impl<V> Index<usize> for Deck<V> {
    type Output = V;

    fn index(&self, position: usize) -> &V {
        &self.identities[position]
    }
}

impl<'a, V> IntoIterator for &'a Deck<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.identities.iter()
    }
}
