//! Math utilities

use super::Float;

/// Gamma function
pub fn gamma(x: Float) -> Float {
    libm::tgamma(x)
}
