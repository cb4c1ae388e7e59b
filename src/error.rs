//! Error types for sampler construction.

use thiserror::Error;

use crate::Float;

/// Errors raised when a distribution is configured outside its domain.
///
/// # Examples
/// ```
/// use simvariate::DistributionError;
///
/// let err = DistributionError::InvalidArgument { distribution: "Cauchy", parameter: "scale", value: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid scale for Cauchy: 0 (must be finite and > 0)");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DistributionError {
    /// A parameter violates the domain of its distribution.
    #[error("Invalid {parameter} for {distribution}: {value} (must be finite and > 0)")]
    InvalidArgument {
        /// Name of the distribution being constructed
        distribution: &'static str,
        /// Name of the offending parameter
        parameter: &'static str,
        /// The rejected value
        value: Float,
    },
}

/// Check that `value` is finite and strictly positive.
pub(crate) fn ensure_positive(
    distribution: &'static str,
    parameter: &'static str,
    value: Float,
) -> Result<Float, DistributionError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        tracing::warn!(distribution, parameter, value, "rejected distribution parameter");
        Err(DistributionError::InvalidArgument { distribution, parameter, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_values() {
        assert_eq!(ensure_positive("Weibull", "shape", 1.5), Ok(1.5));
        assert_eq!(ensure_positive("Weibull", "shape", Float::MIN_POSITIVE), Ok(Float::MIN_POSITIVE));
    }

    #[test]
    fn rejects_zero_and_negative() {
        for value in [0.0, -0.0, -1.0, Float::NEG_INFINITY] {
            let err = ensure_positive("Cauchy", "scale", value).unwrap_err();
            assert!(matches!(err, DistributionError::InvalidArgument { parameter: "scale", .. }));
        }
    }

    #[test]
    fn rejects_non_finite() {
        assert!(ensure_positive("Gamma", "shape", Float::NAN).is_err());
        assert!(ensure_positive("Gamma", "shape", Float::INFINITY).is_err());
    }

    #[test]
    fn display_names_parameter_and_distribution() {
        let err = DistributionError::InvalidArgument { distribution: "Weibull", parameter: "shape", value: -1.0 };
        assert_eq!(err.to_string(), "Invalid shape for Weibull: -1 (must be finite and > 0)");
    }
}
