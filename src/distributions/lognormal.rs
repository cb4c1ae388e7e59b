//! Log-normal distribution

use crate::{seed::Seed, Float};
use super::{Distribution, Normal};

/// Log-normal distribution: `exp` of a [Normal] variate.
/// # Example
/// ```
/// use simvariate::{Seed, distributions::{Distribution, LogNormal}};
///
/// let mut dist = LogNormal::new_seeded(0.0, 1.0, Seed::new(3, 4));
/// assert!(dist.sample() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct LogNormal {
    /// Normal source with the log-space parameters
    normal  : Normal,
}

impl LogNormal {
    /// Create a new [LogNormal] distribution seeded from the clock.
    /// # Arguments
    /// * `mu` - Mean of the logarithm
    /// * `sigma` - Standard deviation of the logarithm
    /// # Returns
    /// * A new [LogNormal].
    pub fn new(mu: Float, sigma: Float) -> Self {
        Self::new_seeded(mu, sigma, Seed::from_clock())
    }

    /// Create a new [LogNormal] distribution with a specified seed.
    /// # Arguments
    /// * `mu` - Mean of the logarithm
    /// * `sigma` - Standard deviation of the logarithm
    /// * `seed` - Seed for the underlying uniform source.
    /// # Returns
    /// A new [LogNormal].
    pub fn new_seeded(mu: Float, sigma: Float, seed: Seed) -> Self {
        Self { normal: Normal::new_seeded(mu, sigma, seed) }
    }

    /// Mean of the logarithm
    pub fn log_mean(&self) -> Float { self.normal.mean() }

    /// Standard deviation of the logarithm
    pub fn log_std_dev(&self) -> Float { self.normal.variance().sqrt() }

    /// Get the theoretical mean of the distribution
    pub fn mean(&self) -> Float {
        (self.normal.mean() + 0.5 * self.normal.variance()).exp()
    }

    /// Get the theoretical variance of the distribution
    pub fn variance(&self) -> Float {
        let s2 = self.normal.variance();
        (s2.exp() - 1.0) * (2.0 * self.normal.mean() + s2).exp()
    }
}

impl Distribution for LogNormal {
    fn sample(&mut self) -> Float {
        self.normal.sample().exp()
    }

    fn name(&self) -> &'static str { "LogNormal" }
}
