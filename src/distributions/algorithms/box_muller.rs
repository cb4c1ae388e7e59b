//! # Box-Muller Transform
//! Box, G. E., & Muller, M. E. (1958).
//! [A note on the generation of random normal deviates](https://doi.org/10.1214%2Faoms%2F1177706645).
//! *The annals of mathematical statistics*, 29(2), 610-611.

use std::f64::consts::PI;

use crate::{distributions::{Distribution, Uniform}, Float};

/// Box-Muller Transform, sine branch
///
/// Draws `u1` then `u2` from `uniform`. `u1` lies in the open unit interval,
/// so `ln(u1)` is always finite.
/// # Arguments
/// * `uniform` - Source of open unit interval variates
/// # Returns
/// A random variable that has the standard normal distribution
pub fn box_muller_transform(uniform: &mut Uniform) -> Float {
    let u1 = uniform.sample();
    let u2 = uniform.sample();
    let r = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * PI * u2;
    r * theta.sin()
}

/// Scaled Box-Muller Transform
/// # Arguments
/// * `uniform` - Source of open unit interval variates
/// * `mu` - Mean of the desired normal distribution
/// * `sigma` - Standard deviation of the desired normal distribution
/// # Returns
/// A random variable that has the normal distribution with mean `mu` and standard deviation `sigma`
pub fn scaled_box_muller_transform(uniform: &mut Uniform, mu: Float, sigma: Float) -> Float {
    mu + sigma * box_muller_transform(uniform)
}
