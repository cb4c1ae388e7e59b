//! Module for probability distributions used in simulations.

use crate::Float;

/// Trait for probability distributions.
///
/// Object safe, so heterogeneous samplers can be held as `Box<dyn Distribution>`.
pub trait Distribution {
    /// Sample a value from the distribution.
    /// # Returns
    /// * [Float] - Sampled value from the distribution.
    fn sample(&mut self) -> Float;

    /// Name of the distribution
    fn name(&self) -> &'static str;

    /// Sample `n` values from the distribution.
    /// # Arguments
    /// * `n` - Number of samples
    /// # Returns
    /// A [Vec] with the sampled values, in draw order.
    fn sample_n(&mut self, n: usize) -> Vec<Float> {
        (0..n).map(|_| self.sample()).collect()
    }
}

pub mod algorithms;

pub mod uniform;
pub use uniform::Uniform;
pub mod normal;
pub use normal::Normal;
pub mod lognormal;
pub use lognormal::LogNormal;
pub mod gamma;
pub use gamma::Gamma;
pub mod cauchy;
pub use cauchy::Cauchy;
pub mod weibull;
pub use weibull::Weibull;
