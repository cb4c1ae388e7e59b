//! # Marsaglia-Tsang Method for generating Gamma variables
//! Marsaglia, G., & Tsang, W. W. (2000).
//! [A simple method for generating gamma variables](https://doi.acm.org/10.1145/358407.358414).
//! *ACM Transactions on Mathematical Software (TOMS)*, 26(3), 363-372.

use crate::{
    distributions::{Distribution, Normal, Uniform},
    Float,
};

/// Marsaglia-Tsang Method struct
///
/// For `alpha < 1` the setup targets `alpha + 1` and each variate is
/// multiplied by `w^(1/alpha)` with `w` uniform on `(0, 1)`.
#[derive(Debug, Copy, Clone)]
pub struct MarsagliaTsang {
    alpha   : Float,
    d       : Float,
    c       : Float,
}

impl MarsagliaTsang {
    /// Setup the Marsaglia-Tsang Method
    /// # Arguments
    /// * `alpha` - Shape, must be > 0
    /// # Returns
    /// A new [MarsagliaTsang]
    pub fn setup(alpha: Float) -> Self {
        let boosted = if alpha < 1.0 { alpha + 1.0 } else { alpha };
        let d = boosted - 1.0 / 3.0;
        Self { alpha, d, c: 1.0 / (9.0 * d).sqrt() }
    }

    pub fn alpha(&self) -> Float { self.alpha }

    /// Perform the Marsaglia-Tsang Method from an existing [MarsagliaTsang]
    /// setup (see [MarsagliaTsang::setup])
    /// # Arguments
    /// * `normal` - Standard normal source
    /// * `uniform` - Open unit interval source
    /// * `theta` - Scale
    /// # Returns
    /// A random variable that has a gamma distribution with shape `alpha` and scale `theta`
    pub fn sample_from_setup(&self, normal: &mut Normal, uniform: &mut Uniform, theta: Float) -> Float {
        if self.alpha < 1.0 {
            let w = uniform.sample();
            return theta * self.accept(normal, uniform) * w.powf(1.0 / self.alpha);
        }
        theta * self.accept(normal, uniform)
    }

    /// Rejection loop with unit scale. Unbounded; terminates with probability 1.
    fn accept(&self, normal: &mut Normal, uniform: &mut Uniform) -> Float {
        let (mut x, mut v, mut u);
        loop {
            x = normal.sample();
            v = 1.0 + self.c * x;
            while v <= 0.0 {
                x = normal.sample();
                v = 1.0 + self.c * x;
            }
            v = v * v * v;
            u = uniform.sample();

            let x2 = x * x;
            if u < 1.0 - 0.0331 * x2 * x2 || u.ln() < 0.5 * x2 + self.d * (1.0 - v + v.ln()) {
                return self.d * v;
            }
            tracing::trace!(x, u, "gamma candidate rejected");
        }
    }

    /// Perform the Marsaglia-Tsang Method
    ///
    /// For performance with a fixed shape `alpha`, use [MarsagliaTsang::setup] and [MarsagliaTsang::sample_from_setup]
    /// # Arguments
    /// * `normal` - Standard normal source
    /// * `uniform` - Open unit interval source
    /// * `alpha` - Shape
    /// * `theta` - Scale
    /// # Returns
    /// A random variable that has a gamma distribution with shape `alpha` and scale `theta`
    pub fn sample(normal: &mut Normal, uniform: &mut Uniform, alpha: Float, theta: Float) -> Float {
        Self::setup(alpha).sample_from_setup(normal, uniform, theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seed;

    fn sources(u: u32, v: u32) -> (Normal, Uniform) {
        let normal = Normal::new_seeded(0.0, 1.0, Seed::new(u, v));
        let uniform = Uniform::new_seeded(Seed::new(v, u));
        (normal, uniform)
    }

    #[test]
    fn setup_constants() {
        let setup = MarsagliaTsang::setup(2.0);
        assert!((setup.d - 5.0 / 3.0).abs() < 1e-12);
        assert!((setup.c - 1.0 / 15.0_f64.sqrt()).abs() < 1e-12);

        let boosted = MarsagliaTsang::setup(0.5);
        assert!((boosted.d - (1.5 - 1.0 / 3.0)).abs() < 1e-12);
        assert_eq!(boosted.alpha(), 0.5);
    }

    #[test]
    fn smoke_test_gamma() {
        let (mut normal, mut uniform) = sources(1, 2);
        for _ in 0..1000 {
            let x = MarsagliaTsang::sample(&mut normal, &mut uniform, 2.0, 3.0);
            assert!(x.is_finite(), "Generated value not finite: {x}");
            assert!(x > 0.0, "Gamma variates must be positive, got {x}");
        }
    }

    #[test]
    fn reproducibility() {
        let (mut n1, mut u1) = sources(7, 8);
        let (mut n2, mut u2) = sources(7, 8);
        for _ in 0..100 {
            let x1 = MarsagliaTsang::sample(&mut n1, &mut u1, 2.5, 1.0);
            let x2 = MarsagliaTsang::sample(&mut n2, &mut u2, 2.5, 1.0);
            assert_eq!(x1, x2, "Values must be identical with same seed");
        }
    }

    #[test]
    fn sample_and_sample_from_setup_are_consistent() {
        let setup = MarsagliaTsang::setup(3.0);
        let (mut n1, mut u1) = sources(11, 12);
        let (mut n2, mut u2) = sources(11, 12);
        for _ in 0..100 {
            let x1 = MarsagliaTsang::sample(&mut n1, &mut u1, 3.0, 2.0);
            let x2 = setup.sample_from_setup(&mut n2, &mut u2, 2.0);
            assert_eq!(x1, x2, "sample and sample_from_setup should produce identical values with same seed");
        }
    }

    #[test]
    fn mean_and_variance_are_close() {
        const N_SAMPLES: usize = 200_000;
        const TOLERANCE_PERCENT: Float = 3.0;

        let alpha = 5.0;
        let theta = 2.0;
        let expected_mean = alpha * theta;
        let expected_var = alpha * theta * theta;

        let setup = MarsagliaTsang::setup(alpha);
        let (mut normal, mut uniform) = sources(42, 43);
        let mut sum = 0.0;
        let mut sum_sq = 0.0;

        for _ in 0..N_SAMPLES {
            let x = setup.sample_from_setup(&mut normal, &mut uniform, theta);
            sum += x;
            sum_sq += x * x;
        }

        let mean = sum / N_SAMPLES as Float;
        let var = sum_sq / N_SAMPLES as Float - mean * mean;

        let mean_tol = expected_mean * TOLERANCE_PERCENT / 100.0;
        let var_tol = expected_var * TOLERANCE_PERCENT / 100.0;

        assert!(
            (mean - expected_mean).abs() <= mean_tol,
            "Sample mean {mean} differs from expected {expected_mean} (tolerance ±{mean_tol})",
        );
        assert!(
            (var - expected_var).abs() <= var_tol,
            "Sample variance {var} differs from expected {expected_var} (tolerance ±{var_tol})",
        );
    }

    #[test]
    fn mean_and_variance_with_alpha_less_than_one() {
        const N_SAMPLES: usize = 200_000;
        const TOLERANCE_PERCENT: Float = 5.0;

        let alpha = 0.7;
        let theta = 2.0;
        let expected_mean = alpha * theta;
        let expected_var = alpha * theta * theta;

        let setup = MarsagliaTsang::setup(alpha);
        let (mut normal, mut uniform) = sources(77, 78);
        let mut sum = 0.0;
        let mut sum_sq = 0.0;

        for _ in 0..N_SAMPLES {
            let x = setup.sample_from_setup(&mut normal, &mut uniform, theta);
            assert!(x >= 0.0, "Gamma variates must be non-negative, got {x}");
            sum += x;
            sum_sq += x * x;
        }

        let mean = sum / N_SAMPLES as Float;
        let var = sum_sq / N_SAMPLES as Float - mean * mean;

        let mean_tol = expected_mean * TOLERANCE_PERCENT / 100.0;
        let var_tol = expected_var * TOLERANCE_PERCENT / 100.0;

        assert!(
            (mean - expected_mean).abs() <= mean_tol,
            "Sample mean {mean} differs from expected {expected_mean} (tolerance ±{mean_tol})",
        );
        assert!(
            (var - expected_var).abs() <= var_tol,
            "Sample variance {var} differs from expected {expected_var} (tolerance ±{var_tol})",
        );
    }
}
