//! Deck generation.
//!
//! `DeckGenerator` turns a set of distinct identities into a shuffled deck
//! with each identity appearing exactly twice. The board size must be
//! exactly twice the number of identities; anything else is a configuration
//! error and no deck is produced.

use std::hash::Hash;

use tracing::debug;

use super::deck::Deck;
use crate::core::config::validate_identities;
use crate::core::{ConfigError, GameRng};

/// Builds shuffled decks from an RNG.
#[derive(Clone, Debug)]
pub struct DeckGenerator {
    rng: GameRng,
}

impl DeckGenerator {
    /// Create a generator drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create a generator with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Generate a shuffled deck of `board_size` cards.
    ///
    /// Fails if `board_size` is zero, odd, or not exactly twice the number of
    /// identities, or if an identity is repeated.
    pub fn generate<V>(
        &mut self,
        identities: &[V],
        board_size: usize,
    ) -> Result<Deck<V>, ConfigError>
    where
        V: Clone + Eq + Hash,
    {
        validate_identities(identities, board_size)?;

        let mut cards = doubled(identities);
        self.rng.shuffle(&mut cards);

        debug!(seed = self.rng.seed(), cards = cards.len(), "generated deck");
        Ok(Deck::from_vec(cards))
    }
}

/// Each identity twice, in input order.
fn doubled<V: Clone>(identities: &[V]) -> Vec<V> {
    identities
        .iter()
        .flat_map(|identity| [identity.clone(), identity.clone()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(deck: &Deck<char>) -> std::collections::BTreeMap<char, usize> {
        let mut counts = std::collections::BTreeMap::new();
        for &c in deck {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_each_identity_twice() {
        let mut generator = DeckGenerator::seeded(42);
        let deck = generator.generate(&['a', 'b', 'c', 'd', 'e'], 10).unwrap();

        assert_eq!(deck.len(), 10);
        let counts = counts(&deck);
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_same_seed_same_deck() {
        let ids = ['a', 'b', 'c', 'd'];
        let deck1 = DeckGenerator::seeded(7).generate(&ids, 8).unwrap();
        let deck2 = DeckGenerator::seeded(7).generate(&ids, 8).unwrap();
        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_shuffle_moves_cards() {
        let ids: Vec<u32> = (0..10).collect();
        let deck = DeckGenerator::seeded(42).generate(&ids, 20).unwrap();
        assert_ne!(deck.as_slice(), doubled(&ids).as_slice());
    }

    #[test]
    fn test_all_pair_arrangements_reachable() {
        // Four cards of two identities have 4!/(2!·2!) = 6 arrangements.
        let mut generator = DeckGenerator::seeded(1);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..600 {
            let deck = generator.generate(&['a', 'b'], 4).unwrap();
            seen.insert(deck.as_slice().iter().collect::<String>());
        }

        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_odd_board_size() {
        let err = DeckGenerator::seeded(1).generate(&['a', 'b'], 5).unwrap_err();
        assert_eq!(err, ConfigError::OddCardCount { cards: 5 });
    }

    #[test]
    fn test_size_mismatch() {
        let err = DeckGenerator::seeded(1).generate(&['a', 'b', 'c'], 4).unwrap_err();
        assert_eq!(err, ConfigError::IdentityCountMismatch { identities: 3, cards: 4 });
    }

    #[test]
    fn test_duplicate_identity() {
        let err = DeckGenerator::seeded(1).generate(&['a', 'a'], 4).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateIdentity { position: 1 });
    }

    #[test]
    fn test_empty() {
        let err = DeckGenerator::seeded(1).generate::<char>(&[], 0).unwrap_err();
        assert_eq!(err, ConfigError::EmptyBoard);
    }
}
