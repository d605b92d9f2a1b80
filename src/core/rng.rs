//! Deterministic random number generation for dealing rounds.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deal sequence
//! - **Serializable**: O(1) state capture and restore
//!
//! One `GameRng` lives inside the engine for the whole session. Every
//! re-deal consumes the next stretch of the stream, so a reset produces a
//! fresh shuffle while a fixed seed keeps the whole session reproducible.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing the deck shuffle.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
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

    /// Shuffle a slice in place (uniform over permutations).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut data1 = [0u8, 1, 2, 3, 4, 5, 6, 7];
        let mut data2 = data1;
        for _ in 0..100 {
            rng1.shuffle(&mut data1);
            rng2.shuffle(&mut data2);
            assert_eq!(data1, data2);
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let mut data1: Vec<u32> = (0..32).collect();
        let mut data2 = data1.clone();
        rng1.shuffle(&mut data1);
        rng2.shuffle(&mut data2);

        assert_ne!(data1, data2);
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_state_restore_resumes_stream() {
        let mut rng = GameRng::new(42);

        // Advance the RNG
        let mut scratch: Vec<u32> = (0..16).collect();
        for _ in 0..10 {
            rng.shuffle(&mut scratch);
        }

        // Save state, continue shuffling
        let state = rng.state();
        let mut expected: Vec<u32> = (0..16).collect();
        rng.shuffle(&mut expected);

        // Restore and verify the stream resumes identically
        let mut restored = GameRng::from_state(&state);
        let mut actual: Vec<u32> = (0..16).collect();
        restored.shuffle(&mut actual);

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
