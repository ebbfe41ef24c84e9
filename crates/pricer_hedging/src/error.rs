//! Error types for the hedging engine.

use pricer_core::types::PricingError;
use pricer_models::analytical::AnalyticalError;
use thiserror::Error;

/// Errors raised before a simulation starts.
///
/// A simulation that starts always completes; every failure mode here is
/// an invalid input.
///
/// # Examples
/// ```
/// use pricer_hedging::HedgingError;
///
/// let err = HedgingError::InvalidSteps(0);
/// assert!(err.to_string().contains("0"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HedgingError {
    /// Rebalancing step count outside `[1, MAX_STEPS]`.
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = crate::hedging::MAX_STEPS)]
    InvalidSteps(usize),

    /// Expiry epsilon negative or non-finite.
    #[error("Invalid expiry epsilon: {0}")]
    InvalidExpiryEpsilon(f64),

    /// Market parameters rejected by the model layer.
    #[error(transparent)]
    InvalidParameters(#[from] AnalyticalError),

    /// Multi-run analysis requested with zero simulations.
    #[error("Invalid simulation count {0}: must be at least 1")]
    InvalidSimulationCount(usize),
}

impl From<HedgingError> for PricingError {
    fn from(err: HedgingError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
