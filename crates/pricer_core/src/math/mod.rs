//! Numerical building blocks.
//!
//! - [`solvers`]: Newton-Raphson and bisection root finders with
//!   structured convergence reporting

pub mod solvers;
