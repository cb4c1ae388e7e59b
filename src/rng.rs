//! Multiply-with-carry bit source
//!
//! Marsaglia's combination of two 16-bit multiply-with-carry lanes into one
//! 32-bit word, as posted to sci.stat.math (1999).

use rand::{rand_core::impls, RngCore, SeedableRng};

use crate::seed::Seed;

/// Multiplier of the `word_a` lane
const MULTIPLIER_A: u32 = 18000;
/// Multiplier of the `word_b` lane
const MULTIPLIER_B: u32 = 36969;
/// Default state of the `word_a` lane
const DEFAULT_WORD_A: u32 = 521288629;
/// Default state of the `word_b` lane
const DEFAULT_WORD_B: u32 = 362436069;

/// Mutable state of a [MultiplyWithCarry] generator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GeneratorState {
    pub word_a: u32,
    pub word_b: u32,
}

/// One multiply-with-carry step of a 16-bit lane.
#[inline]
fn lane_step(word: u32, multiplier: u32) -> u32 {
    multiplier * (word & 0xFFFF) + (word >> 16)
}

/// Whether a lane seeded with `word` is constant after its first step.
///
/// Each lane has two fixed points, `0` and `(multiplier - 1) << 16 | 0xFFFF`.
/// The 18000 lane also reaches the latter from two other words.
fn lane_degenerates(word: u32, multiplier: u32) -> bool {
    let next = lane_step(word, multiplier);
    lane_step(next, multiplier) == next
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self { word_a: DEFAULT_WORD_A, word_b: DEFAULT_WORD_B }
    }
}

/// Combined multiply-with-carry generator producing 32-bit words.
///
/// Not suitable for cryptographic use.
///
/// # Example
/// ```
/// use simvariate::{MultiplyWithCarry, Seed};
///
/// let mut rng = MultiplyWithCarry::new(Seed::new(1, 1));
/// assert_eq!(rng.advance(), 2422818384);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplyWithCarry {
    state: GeneratorState,
}

impl MultiplyWithCarry {
    /// Create a generator from a [Seed]. Missing words are read from the clock.
    pub fn new(seed: Seed) -> Self {
        let mut rng = Self { state: GeneratorState::default() };
        let (u, v) = seed.resolve();
        rng.set_seed(u, v);
        rng
    }

    /// Create a generator seeded from the clock.
    pub fn from_clock() -> Self {
        Self::new(Seed::from_clock())
    }

    /// Overwrite the state with `u` and `v`. A word that would pin its lane to a
    /// fixed point, zero included, leaves that lane unchanged.
    pub fn set_seed(&mut self, u: u32, v: u32) {
        if !lane_degenerates(u, MULTIPLIER_A) {
            self.state.word_a = u;
        }
        if !lane_degenerates(v, MULTIPLIER_B) {
            self.state.word_b = v;
        }
        tracing::debug!(word_a = self.state.word_a, word_b = self.state.word_b, "seeded multiply-with-carry");
    }

    /// Reseed from the current clock reading.
    pub fn reseed_from_clock(&mut self) {
        let (u, v) = Seed::from_clock().resolve();
        self.set_seed(u, v);
    }

    /// Advance both lanes and return the combined 32-bit word.
    #[inline]
    pub fn advance(&mut self) -> u32 {
        let GeneratorState { word_a, word_b } = &mut self.state;
        *word_b = lane_step(*word_b, MULTIPLIER_B);
        *word_a = lane_step(*word_a, MULTIPLIER_A);
        (*word_b << 16).wrapping_add(*word_a)
    }

    /// Draw a [Seed] for a dependent stream.
    pub fn fork(&mut self) -> Seed {
        Seed::new(self.advance(), self.advance())
    }

    /// Current state of the generator
    pub fn state(&self) -> GeneratorState {
        self.state
    }
}

impl RngCore for MultiplyWithCarry {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for MultiplyWithCarry {
    /// Little-endian `u` followed by little-endian `v`.
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let u = u32::from_le_bytes([seed[0], seed[1], seed[2], seed[3]]);
        let v = u32::from_le_bytes([seed[4], seed[5], seed[6], seed[7]]);
        let mut rng = Self { state: GeneratorState::default() };
        rng.set_seed(u, v);
        rng
    }
}
