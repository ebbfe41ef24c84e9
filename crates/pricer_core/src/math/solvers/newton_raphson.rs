//! Newton-Raphson root-finding solver.

use super::search::{RootSearch, StopReason};
use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;
use tracing::trace;

/// Lower barrier applied to the iterate after each update.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LowerBarrier<T> {
    bound: T,
    reset: T,
}

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// Two guards make it usable on functions with a restricted domain such as
/// option prices in volatility:
/// - a derivative floor: the search aborts instead of dividing by a
///   derivative smaller than the floor;
/// - an optional lower barrier: an update that lands at or below `bound` is
///   replaced by `reset` and the iteration continues.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, f_prime, 1.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    config: SolverConfig<T>,
    derivative_floor: T,
    barrier: Option<LowerBarrier<T>>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    ///
    /// The derivative floor defaults to `1e-30` and no barrier is set.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self {
            config,
            derivative_floor: T::from(1e-30).unwrap_or_else(T::min_positive_value),
            barrier: None,
        }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Abort when `|f'(x)| < floor`.
    pub fn with_derivative_floor(mut self, floor: T) -> Self {
        self.derivative_floor = floor.abs();
        self
    }

    /// Replace any iterate `x <= bound` by `reset` after each update.
    pub fn with_lower_barrier(mut self, bound: T, reset: T) -> Self {
        self.barrier = Some(LowerBarrier { bound, reset });
        self
    }

    /// Runs the iteration and reports how it ended.
    ///
    /// On `DerivativeNearZero` the report carries the iterate at which the
    /// derivative vanished and its residual. On `MaxIterations` it carries
    /// the last iterate and `iterations == max_iterations`.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig, StopReason};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 50));
    /// let search = solver.search(|x: f64| x.exp() - 2.0, |x: f64| x.exp(), 0.0);
    ///
    /// assert!(search.converged);
    /// assert_eq!(search.stop, StopReason::Converged);
    /// assert!((search.root - 2.0_f64.ln()).abs() < 1e-10);
    /// ```
    pub fn search<F, G>(&self, f: F, f_prime: G, x0: T) -> RootSearch<T>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;

        for iteration in 0..self.config.max_iterations {
            let f_val = f(x);

            if f_val.abs() < self.config.tolerance {
                return RootSearch::converged(x, iteration + 1, f_val.abs());
            }

            let f_prime_val = f_prime(x);

            if f_prime_val.abs() < self.derivative_floor {
                trace!(iteration, "newton derivative below floor");
                return RootSearch::stopped(
                    x,
                    iteration + 1,
                    f_val.abs(),
                    StopReason::DerivativeNearZero,
                );
            }

            x = x - f_val / f_prime_val;

            if let Some(barrier) = self.barrier {
                if x <= barrier.bound {
                    x = barrier.reset;
                }
            }

            if !x.is_finite() {
                return RootSearch::stopped(
                    x,
                    iteration + 1,
                    T::infinity(),
                    StopReason::NonFinite,
                );
            }
        }

        RootSearch::stopped(
            x,
            self.config.max_iterations,
            f(x).abs(),
            StopReason::MaxIterations,
        )
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative too small
    /// * `Err(SolverError::NumericalInstability)` - Non-finite iterate
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let search = self.search(f, f_prime, x0);
        match search.stop {
            StopReason::Converged => Ok(search.root),
            StopReason::DerivativeNearZero => Err(SolverError::DerivativeNearZero {
                x: search.root.to_f64().unwrap_or(f64::NAN),
            }),
            StopReason::MaxIterations => Err(SolverError::MaxIterationsExceeded {
                iterations: search.iterations,
            }),
            StopReason::NonFinite => Err(SolverError::NumericalInstability(
                "Newton iteration produced non-finite value".to_string(),
            )),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
