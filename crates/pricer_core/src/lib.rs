//! # pricer_core: Numerical Foundation for Black-Scholes Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//! - Root-finding solvers: `NewtonRaphsonSolver`, `BisectionSolver`
//!   (`math::solvers`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - tracing: Iteration-level diagnostics
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};
//!
//! let f = |x: f64| x * x - 2.0;
//! let f_prime = |x: f64| 2.0 * x;
//!
//! let newton = NewtonRaphsonSolver::new(SolverConfig::default());
//! let root = newton.find_root(f, f_prime, 1.0).unwrap();
//! # assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//!
//! let bisection = BisectionSolver::new(SolverConfig::new(1e-10, 200));
//! let search = bisection.search(f, 0.0, 2.0);
//! assert!(search.converged);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error types and solver reports

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
