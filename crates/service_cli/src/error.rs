//! CLI error types

use pricer_core::types::PricingError;
use pricer_hedging::HedgingError;
use pricer_models::analytical::AnalyticalError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the `bsm` user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or validated
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing layer rejected the inputs
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Hedging engine rejected the inputs
    #[error("Hedging error: {0}")]
    Hedging(#[from] HedgingError),

    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be rendered
    #[error("Output error: {0}")]
    Output(String),
}

impl From<AnalyticalError> for CliError {
    fn from(err: AnalyticalError) -> Self {
        CliError::Pricing(err.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
