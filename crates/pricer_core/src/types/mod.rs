//! Core error types shared across the workspace.
//!
//! # Re-exports
//!
//! [`PricingError`] and [`SolverError`] are re-exported at this module level.

pub mod error;

pub use error::{PricingError, SolverError};
