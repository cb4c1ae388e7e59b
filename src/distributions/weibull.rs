//! Weibull distribution

use crate::{
    error::{ensure_positive, DistributionError},
    math::gamma,
    seed::Seed,
    Float,
};
use super::{Distribution, Uniform};

/// Weibull distribution, sampled by inverting its CDF.
///
/// # Example
/// ```
/// use simvariate::{Seed, distributions::{Distribution, Weibull}};
///
/// let mut dist = Weibull::new_seeded(1.5, 3.0, Seed::new(7, 8)).unwrap();
/// assert!(dist.sample() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Weibull {
    /// Shape parameter
    k       : Float,
    /// Scale parameter
    lambda  : Float,
    /// Uniform source
    uniform : Uniform,
}

impl Weibull {
    /// Create a new [Weibull] distribution seeded from the clock.
    /// # Arguments
    /// * `k` - Shape
    /// * `lambda` - Scale
    /// # Errors
    /// [DistributionError::InvalidArgument] if either `k` or `lambda` is not finite and > 0
    pub fn new(k: Float, lambda: Float) -> Result<Self, DistributionError> {
        Self::new_seeded(k, lambda, Seed::from_clock())
    }

    /// Create a new [Weibull] distribution with a specified seed.
    /// # Errors
    /// [DistributionError::InvalidArgument] if either `k` or `lambda` is not finite and > 0
    pub fn new_seeded(k: Float, lambda: Float, seed: Seed) -> Result<Self, DistributionError> {
        let k = ensure_positive("Weibull", "shape", k)?;
        let lambda = ensure_positive("Weibull", "scale", lambda)?;
        tracing::debug!(k, lambda, "created weibull sampler");
        Ok(Self { k, lambda, uniform: Uniform::new_seeded(seed) })
    }

    /// Shape parameter
    pub fn shape(&self) -> Float { self.k }

    /// Scale parameter
    pub fn scale(&self) -> Float { self.lambda }

    /// Get the theoretical mean of the distribution
    pub fn mean(&self) -> Float {
        self.lambda * gamma(1.0 + 1.0 / self.k)
    }

    /// Get the theoretical variance of the distribution
    pub fn variance(&self) -> Float {
        let g1 = gamma(1.0 + 1.0 / self.k);
        let g2 = gamma(1.0 + 2.0 / self.k);
        self.lambda * self.lambda * (g2 - g1 * g1)
    }
}

impl Distribution for Weibull {
    fn sample(&mut self) -> Float {
        self.lambda * (-self.uniform.sample().ln()).powf(1.0 / self.k)
    }

    fn name(&self) -> &'static str { "Weibull" }
}
