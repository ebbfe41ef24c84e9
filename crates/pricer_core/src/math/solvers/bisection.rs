//! Bisection root-finding solver.

use super::search::{RootSearch, StopReason};
use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Bisection root finder for non-decreasing functions.
///
/// Halves `[lower, upper]` each iteration, keeping the half in which a
/// non-decreasing `f` changes sign: `f(mid) > 0` moves the upper end,
/// otherwise the lower end moves. No bracket check is performed; when the
/// root lies outside the interval the search drifts to the nearer end and
/// reports `MaxIterations`.
///
/// Convergence is linear but unconditional, which makes it the fallback
/// when Newton-Raphson stalls.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::new(1e-12, 200));
/// let root = solver.find_root(|x: f64| x * x * x - 8.0, 0.0, 5.0).unwrap();
/// assert!((root - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Runs the bisection and reports how it ended.
    ///
    /// On non-convergence the report carries the last midpoint evaluated.
    pub fn search<F>(&self, f: F, lower: T, upper: T) -> RootSearch<T>
    where
        F: Fn(T) -> T,
    {
        let two = T::one() + T::one();
        let mut lo = lower;
        let mut hi = upper;
        let mut mid = (lo + hi) / two;
        let mut residual = T::infinity();

        for iteration in 0..self.config.max_iterations {
            mid = (lo + hi) / two;
            let f_mid = f(mid);
            residual = f_mid.abs();

            if residual < self.config.tolerance {
                return RootSearch::converged(mid, iteration + 1, residual);
            }

            if f_mid > T::zero() {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        RootSearch::stopped(
            mid,
            self.config.max_iterations,
            residual,
            StopReason::MaxIterations,
        )
    }

    /// Find a root of `f` inside `[lower, upper]`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Midpoint where `|f(x)| < tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    pub fn find_root<F>(&self, f: F, lower: T, upper: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let search = self.search(f, lower, upper);
        if search.converged {
            Ok(search.root)
        } else {
            Err(SolverError::MaxIterationsExceeded {
                iterations: search.iterations,
            })
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
