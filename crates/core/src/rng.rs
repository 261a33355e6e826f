//! RNG module - seeded choice of the next spawn cell
//!
//! Wraps a small, fast, seedable PRNG. A game is fully reproducible from its
//! seed plus the sequence of moves applied to it.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform picker over the current empty cells
#[derive(Debug, Clone)]
pub struct TileRng {
    seed: u64,
    rng: SmallRng,
}

impl TileRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Pick an index uniformly in `0..len`.
    ///
    /// Returns None when `len` is zero.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }

    /// The seed this RNG was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
