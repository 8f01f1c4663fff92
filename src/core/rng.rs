//! Deterministic random number generation for shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Injectable**: Every shuffle takes the generator explicitly
//! - **Replayable**: The seed is kept so a game can be dealt again
//!
//! ## Usage
//!
//! ```
//! use decker::core::DeckRng;
//!
//! let mut rng = DeckRng::new(42);
//! let mut cards = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut cards);
//!
//! // Same seed, same permutation
//! let mut again = vec![1, 2, 3, 4, 5];
//! DeckRng::new(42).shuffle(&mut again);
//! assert_eq!(cards, again);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used for deck and board shuffles.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..=max`.
    pub fn index_up_to(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Shuffle a slice in place with Fisher–Yates.
    ///
    /// Walks from the last index down to 1, swapping each position with a
    /// uniformly chosen index in `0..=i`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let r = self.index_up_to(i);
            slice.swap(i, r);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DeckRng::new(42);
        let mut rng2 = DeckRng::new(42);

        for i in 0..100 {
            assert_eq!(rng1.index_up_to(i), rng2.index_up_to(i));
        }
    }

    #[test]
    fn test_index_up_to_is_inclusive() {
        let mut rng = DeckRng::new(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let idx = rng.index_up_to(2);
            assert!(idx <= 2);
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));

        assert_eq!(rng.index_up_to(0), 0);
    }

    #[test]
    fn test_shuffle_matches_fisher_yates() {
        let mut rng = DeckRng::new(42);
        let mut reference = rng.clone();

        let mut data: Vec<u32> = (0..10).collect();
        rng.shuffle(&mut data);

        let mut expected: Vec<u32> = (0..10).collect();
        for i in (1..expected.len()).rev() {
            let r = reference.index_up_to(i);
            expected.swap(i, r);
        }

        assert_eq!(data, expected);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = DeckRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = DeckRng::new(1);
        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![9];
        rng.shuffle(&mut one);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn test_seed_replays_shuffle() {
        let mut rng = DeckRng::from_entropy();
        let mut first: Vec<u32> = (0..52).collect();
        rng.shuffle(&mut first);

        let mut replay = DeckRng::new(rng.seed());
        let mut second: Vec<u32> = (0..52).collect();
        replay.shuffle(&mut second);

        assert_eq!(first, second);
    }
}
