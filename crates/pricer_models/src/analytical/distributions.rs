//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF goes through `statrs`' complementary error function. Absolute
//! error is around 1e-11 in the body of the distribution, and the lower
//! tail keeps its relative precision instead of flushing to zero.

use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.96) - 0.975_002_104_851_780).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_known_values() {
        assert_relative_eq!(norm_cdf(1.0), 0.841_344_746_068_542_9, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(-1.0), 0.158_655_253_931_457_05, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(2.0), 0.977_249_868_051_820_8, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(1.96), 0.975_002_104_851_780, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [0.1, 0.5, 1.0, 2.5, 4.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_tails() {
        // Lower tail keeps relative precision instead of flushing to zero
        let tail = norm_cdf(-10.0);
        assert!(tail > 0.0);
        assert_relative_eq!(tail, 7.619_853_024_160_527e-24, max_relative = 1e-10);

        assert_eq!(norm_cdf(40.0), 1.0);
        assert_eq!(norm_cdf(-40.0), 0.0);
    }

    #[test]
    fn test_norm_cdf_monotone() {
        let mut previous = norm_cdf(-8.0);
        for i in -79..=80 {
            let current = norm_cdf(i as f64 / 10.0);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_norm_pdf_symmetry_and_decay() {
        assert_relative_eq!(norm_pdf(1.3), norm_pdf(-1.3), epsilon = 1e-16);
        assert!(norm_pdf(5.0) < 1e-5);
        assert!(norm_pdf(8.0) < 1e-12);
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        // Central difference of the CDF reproduces the density
        let h = 1e-5;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical_derivative, norm_pdf(x), epsilon = 1e-8);
        }
    }
}
