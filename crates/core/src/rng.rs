//! RNG module - uniform random piece selection
//!
//! Every kind is drawn independently with probability 1/7. A seeded
//! randomizer reproduces the same sequence, which tests rely on; the binary
//! seeds from the OS unless a seed is given.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::types::{PieceKind, PIECE_KINDS};

/// Uniform piece-kind generator
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: StdRng,
}

impl Randomizer {
    /// Create a randomizer with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a randomizer seeded from the operating system
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Draw the next piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        PIECE_KINDS[self.rng.random_range(0..PIECE_KINDS.len())]
    }
}
