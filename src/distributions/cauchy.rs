//! Cauchy distribution

use std::f64::consts::PI;

use crate::{
    error::{ensure_positive, DistributionError},
    seed::Seed,
    Float,
};
use super::{Distribution, Uniform};

/// Cauchy distribution, sampled by inverting its CDF. Mean and variance are undefined.
///
/// # Example
/// ```
/// use simvariate::{Seed, distributions::{Distribution, Cauchy}};
///
/// let mut dist = Cauchy::new_seeded(5.0, 1.0, Seed::new(1, 2)).unwrap();
/// println!("Sampled value: {}", dist.sample());
/// assert!(Cauchy::new(5.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Cauchy {
    /// Location (median)
    x0      : Float,
    /// Scale (> 0)
    gamma   : Float,
    /// Uniform source
    uniform : Uniform,
}

impl Cauchy {
    /// Create a new [Cauchy] distribution seeded from the clock.
    /// # Arguments
    /// * `median` - Location
    /// * `scale` - Half width at half maximum
    /// # Errors
    /// [DistributionError::InvalidArgument] if `scale` is not finite and > 0
    pub fn new(median: Float, scale: Float) -> Result<Self, DistributionError> {
        Self::new_seeded(median, scale, Seed::from_clock())
    }

    /// Create a new [Cauchy] distribution with a specified seed.
    /// # Errors
    /// [DistributionError::InvalidArgument] if `scale` is not finite and > 0
    pub fn new_seeded(median: Float, scale: Float, seed: Seed) -> Result<Self, DistributionError> {
        let gamma = ensure_positive("Cauchy", "scale", scale)?;
        tracing::debug!(median, scale, "created cauchy sampler");
        Ok(Self { x0: median, gamma, uniform: Uniform::new_seeded(seed) })
    }

    /// Location parameter
    pub fn median(&self) -> Float { self.x0 }

    /// Scale parameter
    pub fn scale(&self) -> Float { self.gamma }
}

impl Distribution for Cauchy {
    fn sample(&mut self) -> Float {
        let p = self.uniform.sample();
        self.x0 + self.gamma * (PI * (p - 0.5)).tan()
    }

    fn name(&self) -> &'static str { "Cauchy" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_scale_fails() {
        let err = Cauchy::new(5.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            DistributionError::InvalidArgument { distribution: "Cauchy", parameter: "scale", value: 0.0 }
        );
    }

    #[test]
    fn negative_and_infinite_scale_fail() {
        assert!(Cauchy::new(0.0, -2.0).is_err());
        assert!(Cauchy::new(0.0, Float::INFINITY).is_err());
    }

    #[test]
    fn inverse_cdf_of_uniform_stream() {
        let seed = Seed::new(13, 31);
        let mut dist = Cauchy::new_seeded(5.0, 2.0, seed).unwrap();
        let mut uniform = Uniform::new_seeded(seed);
        for _ in 0..100 {
            let expected = 5.0 + 2.0 * (PI * (uniform.sample() - 0.5)).tan();
            assert_eq!(dist.sample(), expected);
        }
    }

    #[test]
    fn empirical_median_and_quartiles() {
        const N_SAMPLES: usize = 100_000;
        let mut dist = Cauchy::new_seeded(5.0, 2.0, Seed::new(606, 707)).unwrap();
        let mut samples = dist.sample_n(N_SAMPLES);
        samples.sort_by(|a, b| a.total_cmp(b));

        // Quartiles sit at median ± scale
        let q1 = samples[N_SAMPLES / 4];
        let q2 = samples[N_SAMPLES / 2];
        let q3 = samples[3 * N_SAMPLES / 4];
        assert!((q2 - 5.0).abs() < 0.05, "median {q2}");
        assert!((q1 - 3.0).abs() < 0.1, "first quartile {q1}");
        assert!((q3 - 7.0).abs() < 0.1, "third quartile {q3}");
    }

    #[test]
    fn parameters() {
        let dist = Cauchy::new(1.5, 0.5).unwrap();
        assert_eq!(dist.median(), 1.5);
        assert_eq!(dist.scale(), 0.5);
        assert_eq!(dist.name(), "Cauchy");
    }
}
