//! Multi-run hedging error statistics.
//!
//! Run `i` is seeded with `i`, so a batch is reproducible and its results do
//! not depend on how rayon schedules the runs.

use crate::error::HedgingError;
use crate::hedging::{simulate_hedge_with, HedgeConfig};
use crate::rng::PricerRng;
use pricer_models::instruments::OptionSpec;
use rayon::prelude::*;

/// Default number of runs in a batch.
pub const DEFAULT_SIMULATIONS: usize = 100;

/// Hedging error distribution over a batch of runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HedgeErrorStats {
    /// Number of runs.
    pub n_simulations: usize,
    /// Mean hedging error.
    pub mean_error: f64,
    /// Population standard deviation of the hedging error.
    pub std_error: f64,
    /// Mean error as a percentage of the premium.
    pub mean_error_percent: f64,
    /// Population standard deviation of the percentage error.
    pub std_error_percent: f64,
    /// Largest absolute hedging error.
    pub max_error: f64,
    /// Per-run hedging errors in seed order.
    pub errors: Vec<f64>,
}

impl HedgeErrorStats {
    /// Aggregates per-run hedging errors and percentage errors.
    ///
    /// Returns `None` for an empty batch or mismatched lengths.
    pub fn from_runs(errors: Vec<f64>, error_percents: &[f64]) -> Option<Self> {
        if errors.is_empty() || errors.len() != error_percents.len() {
            return None;
        }

        let (mean_error, std_error) = mean_and_std(&errors);
        let (mean_error_percent, std_error_percent) = mean_and_std(error_percents);
        let max_error = errors.iter().fold(0.0_f64, |acc, e| acc.max(e.abs()));

        Some(Self {
            n_simulations: errors.len(),
            mean_error,
            std_error,
            mean_error_percent,
            std_error_percent,
            max_error,
            errors,
        })
    }
}

fn mean_and_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Runs `n_simulations` independent hedges and aggregates their errors.
///
/// # Errors
/// - `HedgingError::InvalidSimulationCount` if `n_simulations` is 0
/// - any configuration error from [`HedgeConfig::validate`]
///
/// # Examples
/// ```
/// use pricer_hedging::{run_multiple_simulations, HedgeConfig};
/// use pricer_models::instruments::{MarketParameters, OptionSpec, OptionType};
///
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let spec = OptionSpec::new(params, OptionType::Call);
/// let config = HedgeConfig::default().with_steps(52);
///
/// let stats = run_multiple_simulations(&spec, 20, &config).unwrap();
/// assert_eq!(stats.errors.len(), 20);
/// assert!(stats.max_error >= stats.mean_error.abs());
/// ```
pub fn run_multiple_simulations(
    spec: &OptionSpec,
    n_simulations: usize,
    config: &HedgeConfig,
) -> Result<HedgeErrorStats, HedgingError> {
    if n_simulations == 0 {
        return Err(HedgingError::InvalidSimulationCount(n_simulations));
    }
    config.validate()?;

    let summaries = (0..n_simulations as u64)
        .into_par_iter()
        .map(|seed| {
            let mut rng = PricerRng::from_seed(seed);
            simulate_hedge_with(spec, config, &mut rng).map(|run| run.summary)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let errors: Vec<f64> = summaries.iter().map(|s| s.hedging_error).collect();
    let error_percents: Vec<f64> = summaries.iter().map(|s| s.error_percent).collect();

    let stats = HedgeErrorStats::from_runs(errors, &error_percents)
        .ok_or(HedgingError::InvalidSimulationCount(n_simulations))?;

    tracing::debug!(
        n_simulations,
        mean_error = stats.mean_error,
        std_error = stats.std_error,
        max_error = stats.max_error,
        "hedge batch finished"
    );

    Ok(stats)
}
