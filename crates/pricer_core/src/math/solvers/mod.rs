//! Root-finding solvers for numerical computation.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Fast quadratic convergence using derivatives,
//!   with a derivative floor and an optional lower barrier on the iterate
//! - [`BisectionSolver`]: Unconditional interval halving for non-decreasing
//!   functions
//!
//! ## Configuration
//!
//! Both solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Search Reports
//!
//! Each solver offers two entry points. `search` always returns a
//! [`RootSearch`] with the last iterate, the iteration count, the residual
//! and a [`StopReason`]; `find_root` turns anything but convergence into a
//! [`SolverError`](crate::types::SolverError).
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig, StopReason};
//!
//! // Newton stalls on a flat derivative, bisection takes over
//! let f = |x: f64| (x - 1.0).powi(3);
//! let newton = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 100))
//!     .with_derivative_floor(1e-6);
//! let first = newton.search(f, |x: f64| 3.0 * (x - 1.0).powi(2), 1.0 + 1e-3);
//! assert_eq!(first.stop, StopReason::DerivativeNearZero);
//!
//! let bisection = BisectionSolver::new(SolverConfig::new(1e-12, 200));
//! let second = bisection.search(f, 0.0, 3.0);
//! assert!(second.converged);
//! ```

mod bisection;
mod config;
mod newton_raphson;
mod search;

// Re-export public types at module level
pub use bisection::BisectionSolver;
pub use config::SolverConfig;
pub use newton_raphson::NewtonRaphsonSolver;
pub use search::{RootSearch, StopReason};
