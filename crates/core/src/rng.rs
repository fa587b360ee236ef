//! RNG module - uniform random piece generation
//!
//! Pieces are drawn independently and uniformly from the seven kinds: no bag,
//! no weighting, back-to-back repeats allowed.
//!
//! The entropy source is a small seedable LCG so that a seed replays a game
//! exactly (tests and benches depend on this).

use crate::pieces::random_piece;
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Endless source of uniformly chosen piece kinds.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    seed: u32,
}

impl PieceGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        random_piece(&mut self.rng)
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
