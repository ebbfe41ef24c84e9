//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced by pricing, Greeks and hedging operations
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every crate in the workspace converts its local error type into one of
/// these categories at its public boundary.
///
/// # Variants
/// - `InvalidInput`: Invalid market data, parameters or discriminants
/// - `NumericalInstability`: Computation produced non-finite values
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

/// Root-finding solver errors.
///
/// Returned by the `find_root` convenience methods. The `search` methods
/// never fail; they report the same conditions through
/// [`StopReason`](crate::math::solvers::StopReason).
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        PricingError::NumericalInstability(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        assert_eq!(
            PricingError::InvalidInput("bad".to_string()).to_string(),
            "Invalid input: bad"
        );
        assert_eq!(
            PricingError::NumericalInstability("nan".to_string()).to_string(),
            "Numerical instability: nan"
        );
    }

    #[test]
    fn test_solver_error_display() {
        let err = SolverError::MaxIterationsExceeded { iterations: 100 };
        assert_eq!(err.to_string(), "Failed to converge after 100 iterations");

        let err = SolverError::DerivativeNearZero { x: 0.5 };
        assert_eq!(err.to_string(), "Derivative near zero at x = 0.5");
    }

    #[test]
    fn test_solver_error_into_pricing_error() {
        let err: PricingError = SolverError::MaxIterationsExceeded { iterations: 3 }.into();
        match err {
            PricingError::NumericalInstability(msg) => assert!(msg.contains("3 iterations")),
            other => panic!("Expected NumericalInstability, got {:?}", other),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("x".to_string());
        let _: &dyn std::error::Error = &err;
        let err = SolverError::NumericalInstability("y".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
