//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deal
//! - **Reproducible**: Entropy-seeded games remember their seed
//! - **Unbiased**: Shuffling is a uniform Fisher–Yates permutation
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut left = vec![1, 1, 2, 2, 3, 3];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used to deal a game.
///
/// Uses ChaCha8 for speed while keeping good statistical quality, so every
/// arrangement of the deck is reachable with equal probability.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh, non-deterministic seed.
    ///
    /// The drawn seed is kept so the deal can be replayed with [`GameRng::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Create a seeded RNG if a seed is given, otherwise an entropy-seeded one.
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealt(rng: &mut GameRng) -> Vec<u32> {
        let mut data: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..10 {
            assert_eq!(dealt(&mut rng1), dealt(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(dealt(&mut rng1), dealt(&mut rng2));
    }

    #[test]
    fn test_entropy_seed_is_replayable() {
        let mut fresh = GameRng::from_entropy();
        let mut replay = GameRng::new(fresh.seed());

        assert_eq!(dealt(&mut fresh), dealt(&mut replay));
    }

    #[test]
    fn test_from_seed_or_entropy() {
        assert_eq!(GameRng::from_seed_or_entropy(Some(9)).seed(), 9);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_reaches_every_arrangement() {
        // Three distinct elements have six orderings; a fair shuffle hits all.
        let mut rng = GameRng::new(3);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..600 {
            let mut data = [0u8, 1, 2];
            rng.shuffle(&mut data);
            seen.insert(data);
        }

        assert_eq!(seen.len(), 6);
    }
}
