//! Check command implementation
//!
//! Prints the effective configuration after file, environment and flag
//! layering.

use serde_json::json;

use crate::config::CliConfig;
use crate::output::{Report, Section};
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<Report> {
    let solver = &config.solver;
    let hedging = &config.hedging;

    let section = Section::new("Effective configuration", &["Setting", "Value"])
        .kv("log_level", config.log_level.to_string())
        .kv("solver.initial_vol", solver.initial_vol.to_string())
        .kv("solver.tolerance", format!("{:e}", solver.tolerance))
        .kv("solver.max_iterations", solver.max_iterations.to_string())
        .kv("solver.vol_low", solver.vol_low.to_string())
        .kv("solver.vol_high", solver.vol_high.to_string())
        .kv("hedging.n_steps", hedging.n_steps.to_string())
        .kv("hedging.n_simulations", hedging.n_simulations.to_string())
        .kv("hedging.expiry_epsilon", format!("{:e}", hedging.expiry_epsilon));

    let data = json!({
        "log_level": config.log_level.as_filter_str(),
        "solver": {
            "initial_vol": solver.initial_vol,
            "tolerance": solver.tolerance,
            "max_iterations": solver.max_iterations,
            "vol_low": solver.vol_low,
            "vol_high": solver.vol_high,
        },
        "hedging": {
            "n_steps": hedging.n_steps,
            "n_simulations": hedging.n_simulations,
            "expiry_epsilon": hedging.expiry_epsilon,
        },
    });

    Report::new(vec![section], &data)
}
