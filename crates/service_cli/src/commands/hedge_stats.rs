//! Hedge-stats command implementation

use pricer_hedging::{run_multiple_simulations, HedgeConfig};
use pricer_models::instruments::OptionSpec;
use tracing::info;

use crate::cli::ContractArgs;
use crate::output::{num, Report, Section};
use crate::Result;

/// Run the hedge-stats command
pub fn run(
    contract: &ContractArgs,
    volatility: f64,
    config: &HedgeConfig,
    n_simulations: usize,
) -> Result<Report> {
    let params = contract.market_parameters(volatility)?;
    let spec = OptionSpec::new(params, contract.option_type);

    let stats = run_multiple_simulations(&spec, n_simulations, config)?;

    info!(
        n_simulations,
        mean_error = stats.mean_error,
        max_error = stats.max_error,
        "hedge statistics complete"
    );

    let section = Section::key_value(format!(
        "Hedging error over {} runs ({} steps, seeds 0..{})",
        stats.n_simulations, config.n_steps, stats.n_simulations
    ))
    .kv("Premium", num(spec.price()))
    .kv("Mean error", num(stats.mean_error))
    .kv("Std error", num(stats.std_error))
    .kv("Mean error (%)", format!("{:.2}", stats.mean_error_percent))
    .kv("Std error (%)", format!("{:.2}", stats.std_error_percent))
    .kv("Max |error|", num(stats.max_error));

    Report::new(vec![section], &stats)
}
