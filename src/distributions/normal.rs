//! Normal distribution

use crate::{seed::Seed, Float};
use super::{
    Distribution,
    Uniform,
    algorithms::box_muller::scaled_box_muller_transform,
};

/// Normal distribution.
///
/// Implemented via the sine branch of the Box-Muller transform, two uniform
/// draws per variate. See
/// Box, G. E., & Muller, M. E. (1958).
/// [A note on the generation of random normal deviates](https://doi.org/10.1214%2Faoms%2F1177706645).
///
/// # Example
/// ```
/// use simvariate::{Seed, distributions::{Distribution, Normal}};
///
/// let mut dist = Normal::new_seeded(5.0, 1.0, Seed::new(1, 2));
/// let sample = dist.sample();
/// println!("Sampled value: {sample}");
/// ```
#[derive(Debug, Clone)]
pub struct Normal {
    /// The mean
    mu      : Float,
    /// The standard deviation
    sigma   : Float,
    /// Uniform source
    uniform : Uniform,
}

impl Normal {
    /// Create a new [Normal] distribution seeded from the clock.
    /// # Arguments
    /// * `mu` - Mean
    /// * `sigma` - Standard deviation
    /// # Returns
    /// * A new [Normal].
    pub fn new(mu: Float, sigma: Float) -> Self {
        Self::new_seeded(mu, sigma, Seed::from_clock())
    }

    /// Create a new [Normal] distribution with a specified seed.
    /// # Arguments
    /// * `mu` - Mean
    /// * `sigma` - Standard deviation
    /// * `seed` - Seed for the uniform source.
    /// # Returns
    /// * A new [Normal].
    pub fn new_seeded(mu: Float, sigma: Float, seed: Seed) -> Self {
        Self::from_uniform(mu, sigma, Uniform::new_seeded(seed))
    }

    /// Create a new [Normal] distribution drawing from an existing [Uniform].
    pub fn from_uniform(mu: Float, sigma: Float, uniform: Uniform) -> Self {
        tracing::debug!(mu, sigma, "created normal sampler");
        Self { mu, sigma, uniform }
    }

    /// Get the theoretical mean of the distribution
    pub fn mean(&self) -> Float { self.mu }

    /// Get the theoretical variance of the distribution
    pub fn variance(&self) -> Float { self.sigma.powi(2) }
}

impl Distribution for Normal {
    fn sample(&mut self) -> Float {
        scaled_box_muller_transform(&mut self.uniform, self.mu, self.sigma)
    }

    fn name(&self) -> &'static str { "Normal" }
}
