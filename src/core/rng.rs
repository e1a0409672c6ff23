//! Seeded randomness for content sampling and board shuffles.
//!
//! The controller owns one root stream and forks a child for every session,
//! so a session's sample and in-game reshuffles depend only on the root
//! seed and how many sessions came before it.
//!
//! ```
//! use chem_games::core::GameRng;
//!
//! let mut root = GameRng::new(42);
//! let mut first = root.fork();
//!
//! let mut board = vec!["Carbon", "Sigma Bond", "Pi Bond", "sp Hybrid"];
//! first.shuffle(&mut board);
//!
//! let mut replayed = GameRng::new(42).fork();
//! let mut again = vec!["Carbon", "Sigma Bond", "Pi Bond", "sp Hybrid"];
//! replayed.shuffle(&mut again);
//! assert_eq!(board, again);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment spreading child seeds apart.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream behind every shuffle and sample in the engine.
///
/// Permutations come from explicit Fisher–Yates passes so a seed maps to
/// the same board regardless of `rand`'s slice helpers.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    /// Stream seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Stream seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Seed this stream was created from. Logged when a session starts.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Child stream for the next session.
    ///
    /// The n-th fork of a given seed is always the same stream and does not
    /// consume values from the parent.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform index in `lo..hi`.
    fn index_in(&mut self, lo: usize, hi: usize) -> usize {
        self.inner.gen_range(lo..hi)
    }

    /// Shuffle in place, back to front.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.index_in(0, i + 1);
            slice.swap(i, j);
        }
    }

    /// Draw `count` distinct elements in random order.
    ///
    /// Partial Fisher–Yates over an index table: only `count` swaps. Draws
    /// everything if the slice is shorter than `count`.
    #[must_use]
    pub fn sample<T: Clone>(&mut self, slice: &[T], count: usize) -> Vec<T> {
        let mut indices: Vec<usize> = (0..slice.len()).collect();
        let take = count.min(slice.len());

        for i in 0..take {
            let j = self.index_in(i, indices.len());
            indices.swap(i, j);
        }

        indices[..take].iter().map(|&i| slice[i].clone()).collect()
    }

    /// One element chosen uniformly, `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let idx = self.index_in(0, slice.len());
        slice.get(idx)
    }
}
