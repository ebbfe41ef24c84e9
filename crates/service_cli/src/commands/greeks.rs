//! Greeks command implementation

use pricer_models::analytical::Greeks;
use pricer_models::instruments::{OptionSpec, OptionType};
use serde::Serialize;
use tracing::info;

use crate::cli::ContractArgs;
use crate::output::{num, Report, Section};
use crate::Result;

#[derive(Debug, Serialize)]
struct GreeksOutput {
    option_type: OptionType,
    price: f64,
    greeks: Greeks,
}

/// Run the greeks command
pub fn run(contract: &ContractArgs, volatility: f64) -> Result<Report> {
    let params = contract.market_parameters(volatility)?;
    let spec = OptionSpec::new(params, contract.option_type);
    let greeks = spec.greeks();

    info!(option_type = %contract.option_type, delta = greeks.delta, "computed greeks");

    let section = Section::new(
        format!("{} option Greeks", contract.option_type),
        &["Greek", "Value", "Unit"],
    )
    .row(["Delta".to_string(), num(greeks.delta), "per unit spot".to_string()])
    .row(["Gamma".to_string(), num(greeks.gamma), "per unit spot²".to_string()])
    .row(["Vega".to_string(), num(greeks.vega), "per 1% vol".to_string()])
    .row(["Theta".to_string(), num(greeks.theta), "per calendar day".to_string()])
    .row(["Rho".to_string(), num(greeks.rho), "per 1% rate".to_string()]);

    let output = GreeksOutput {
        option_type: contract.option_type,
        price: spec.price(),
        greeks,
    };

    Report::new(vec![section], &output)
}
