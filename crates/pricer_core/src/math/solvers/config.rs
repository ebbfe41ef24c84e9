//! Solver configuration types.

use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// Shared by [`NewtonRaphsonSolver`](super::NewtonRaphsonSolver) and
/// [`BisectionSolver`](super::BisectionSolver).
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.max_iterations, 100);
///
/// let custom = SolverConfig::new(1e-6, 100).with_max_iterations(250);
/// assert_eq!(custom.max_iterations, 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on the absolute residual.
    ///
    /// The solver stops as soon as `|f(x)| < tolerance`.
    pub tolerance: T,

    /// Hard cap on the number of iterations.
    ///
    /// This is the only termination guarantee of the root-finding loops.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values: `tolerance = 1e-10`, `max_iterations = 100`.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap_or_else(T::epsilon),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Returns a copy with a different tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0`.
    pub fn with_tolerance(self, tolerance: T) -> Self {
        Self::new(tolerance, self.max_iterations)
    }

    /// Returns a copy with a different iteration cap.
    ///
    /// # Panics
    ///
    /// Panics if `max_iterations == 0`.
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self::new(self.tolerance, max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert!((config.tolerance - 1e-10).abs() < 1e-15);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_new_config() {
        let config: SolverConfig<f64> = SolverConfig::new(1e-6, 50);
        assert!((config.tolerance - 1e-6).abs() < 1e-15);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_new_config_zero_tolerance_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(0.0, 100);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_new_config_zero_iterations_panics() {
        let _: SolverConfig<f64> = SolverConfig::new(1e-10, 0);
    }

    #[test]
    fn test_with_overrides() {
        let config: SolverConfig<f64> = SolverConfig::default()
            .with_tolerance(1e-6)
            .with_max_iterations(20);
        assert_eq!(config, SolverConfig::new(1e-6, 20));
    }

    #[test]
    fn test_config_with_f32() {
        let config: SolverConfig<f32> = SolverConfig::default();
        assert!(config.tolerance > 0.0);
        assert_eq!(config.max_iterations, 100);
    }
}
