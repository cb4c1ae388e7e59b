//! Uniform distribution on the open unit interval

use crate::{
    rng::MultiplyWithCarry,
    seed::{ReseedPolicy, Seed},
    Float,
};
use super::Distribution;

/// `1 / (2^32 + 2)`
const OPEN_UNIT_SCALE: Float = 2.328306435454494e-10;

/// Uniform distribution on `(0, 1)`.
///
/// A 32-bit word `u` maps to `(u + 1) / (2^32 + 2)`, so neither 0 nor 1 is
/// ever returned and `ln` of a sample is always defined.
///
/// # Example
/// ```
/// use simvariate::{Seed, distributions::{Distribution, Uniform}};
///
/// let mut dist = Uniform::new_seeded(Seed::new(12345, 67890));
/// let sample = dist.sample();
/// assert!(sample > 0.0 && sample < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Uniform {
    /// Bit source
    rng     : MultiplyWithCarry,
    /// When to take a fresh seed from the clock
    policy  : ReseedPolicy,
}

impl Uniform {
    /// Create a new [Uniform] seeded from the clock.
    pub fn new() -> Self {
        Self::new_seeded(Seed::from_clock())
    }

    /// Create a new [Uniform] with a specified seed.
    /// # Arguments
    /// * `seed` - Seed for the bit source. Missing words are read from the clock.
    /// # Returns
    /// A new [Uniform].
    pub fn new_seeded(seed: Seed) -> Self {
        Self::with_policy(seed, ReseedPolicy::Once)
    }

    /// Create a new [Uniform] with a specified seed and [ReseedPolicy].
    pub fn with_policy(seed: Seed, policy: ReseedPolicy) -> Self {
        Self { rng: MultiplyWithCarry::new(seed), policy }
    }

    /// Overwrite the bit source state. See [MultiplyWithCarry::set_seed] for refused words.
    pub fn reseed(&mut self, u: u32, v: u32) {
        self.rng.set_seed(u, v);
    }

    /// Reseed the bit source from the clock.
    pub fn reseed_from_clock(&mut self) {
        self.rng.reseed_from_clock();
    }

    /// Draw a [Seed] for a dependent stream from this one.
    pub fn fork(&mut self) -> Seed {
        self.rng.fork()
    }

    /// The [ReseedPolicy] applied before each draw
    pub fn policy(&self) -> ReseedPolicy { self.policy }

    /// Get the theoretical mean of the distribution
    pub fn mean(&self) -> Float { 0.5 }

    /// Get the theoretical variance of the distribution
    pub fn variance(&self) -> Float { 1.0 / 12.0 }
}

impl Default for Uniform {
    fn default() -> Self {
        Self::new()
    }
}

impl Distribution for Uniform {
    fn sample(&mut self) -> Float {
        if self.policy == ReseedPolicy::EveryDraw {
            self.rng.reseed_from_clock();
        }
        (self.rng.advance() as Float + 1.0) * OPEN_UNIT_SCALE
    }

    fn name(&self) -> &'static str { "Uniform" }
}
