//! Utilities for testing.
//!
//! This module provides helper functions commonly used in distribution
//! tests, such as computing descriptive statistics from samples and
//! asserting approximate equality with relative or absolute tolerances.
//!
//! These utilities are not intended for use in production code but
//! only in `#[cfg(test)]` contexts across different distribution modules.

use crate::Float;

/// Descriptive statistics of a sample.
///
/// # Example
/// ```
/// use simvariate::test_utils::BasicStatistics;
///
/// let stats = BasicStatistics::compute(&[1.0, 2.0, 3.0]);
/// assert_eq!(stats.mean(), 2.0);
/// assert_eq!(stats.variance(), 2.0/3.0);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct BasicStatistics {
    mean: Float,
    variance: Float,
    min: Float,
    max: Float,
}

impl BasicStatistics {
    /// Compute the **sample mean** and **population variance** of `samples`.
    /// - `mean = Σx / n`
    /// - `variance = Σ(x - mean)² / n`
    pub fn compute(samples: &[Float]) -> Self {
        let n = samples.len() as Float;
        let mean = samples.iter().sum::<Float>() / n;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<Float>() / n;
        let min = samples.iter().copied().fold(Float::INFINITY, Float::min);
        let max = samples.iter().copied().fold(Float::NEG_INFINITY, Float::max);
        Self { mean, variance, min, max }
    }

    pub fn mean(&self) -> Float { self.mean }

    pub fn variance(&self) -> Float { self.variance }

    pub fn std_dev(&self) -> Float { self.variance.sqrt() }

    pub fn min(&self) -> Float { self.min }

    pub fn max(&self) -> Float { self.max }
}

/// Assert that two floating-point values are approximately equal within
/// a relative tolerance expressed as a fraction of the expected value.
///
/// # Arguments
/// * `actual` – The observed value.
/// * `expected` – The theoretical or expected value.
/// * `tolerance` – The maximum allowed relative error (e.g., `0.05` for 5%).
/// * `label` – A label for the assertion, included in failure messages.
///
/// # Panics
/// Panics if the absolute difference exceeds `|expected| * tolerance`.
///
/// # Example
/// ```
/// use simvariate::test_utils::assert_close;
///
/// assert_close(10.2, 10.0, 0.05, "test value"); // passes
/// ```
pub fn assert_close(actual: Float, expected: Float, tolerance: Float, label: &str) {
    assert!(
        (actual - expected).abs() <= expected.abs() * tolerance,
        "{label} {actual} outside tolerance of expected {expected}"
    );
}

/// Assert that `actual` lies within `expected ± tolerance`.
///
/// # Example
/// ```
/// use simvariate::test_utils::assert_close_abs;
///
/// assert_close_abs(0.004, 0.0, 0.01, "mean"); // passes
/// ```
pub fn assert_close_abs(actual: Float, expected: Float, tolerance: Float, label: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{label} {actual} outside {expected} ± {tolerance}"
    );
}
