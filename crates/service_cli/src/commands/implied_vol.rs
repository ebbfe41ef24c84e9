//! Implied-volatility command implementation

use pricer_models::volatility::{
    implied_volatility, implied_volatility_bisection, implied_volatility_newton, ImpliedVolConfig,
    ImpliedVolOutcome, SolveMethod, SolverResult,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{ContractArgs, IvMethod};
use crate::output::{num, Report, Section};
use crate::{CliError, Result};

#[derive(Debug, Serialize)]
struct IvOutput {
    market_price: f64,
    implied_vol: Option<f64>,
    method: Option<SolveMethod>,
    stages: Vec<SolverResult>,
}

fn method_label(method: SolveMethod) -> &'static str {
    match method {
        SolveMethod::NewtonRaphson => "newton-raphson",
        SolveMethod::Bisection => "bisection",
    }
}

fn stage_row(result: &SolverResult) -> Vec<String> {
    vec![
        method_label(result.method).to_string(),
        num(result.implied_vol),
        result.converged.to_string(),
        result.iterations.to_string(),
        format!("{:.3e}", result.final_error),
    ]
}

/// Run the implied-vol command
pub fn run(
    market_price: f64,
    contract: &ContractArgs,
    method: IvMethod,
    config: &ImpliedVolConfig,
) -> Result<Report> {
    if !(market_price > 0.0 && market_price.is_finite()) {
        return Err(CliError::InvalidArgument(format!(
            "market price must be positive, got {}",
            market_price
        )));
    }
    let params = contract.market_parameters(config.initial_vol)?;
    let (spot, strike, expiry, rate) = (
        params.spot(),
        params.strike(),
        params.expiry(),
        params.rate(),
    );
    let option_type = contract.option_type;

    let stages: Vec<SolverResult> = match method {
        IvMethod::Auto => {
            match implied_volatility(market_price, spot, strike, expiry, rate, option_type, config) {
                ImpliedVolOutcome::Solved(result) => vec![result],
                ImpliedVolOutcome::Unsolved { newton, bisection } => vec![newton, bisection],
            }
        }
        IvMethod::Newton => vec![implied_volatility_newton(
            market_price, spot, strike, expiry, rate, option_type, config,
        )],
        IvMethod::Bisection => vec![implied_volatility_bisection(
            market_price, spot, strike, expiry, rate, option_type, config,
        )],
    };

    let solved = stages.iter().find(|r| r.converged);
    let output = IvOutput {
        market_price,
        implied_vol: solved.map(|r| r.implied_vol),
        method: solved.map(|r| r.method),
        stages: stages.clone(),
    };

    match solved {
        Some(r) => info!(
            implied_vol = r.implied_vol,
            method = method_label(r.method),
            "implied volatility solved"
        ),
        None => warn!(market_price, strike, "implied volatility did not converge"),
    }

    let mut stage_section = Section::new(
        "Solver stages",
        &["Stage", "Implied vol", "Converged", "Iterations", "Final error"],
    );
    for result in &stages {
        stage_section.push_row(stage_row(result));
    }

    let summary = Section::key_value("Implied volatility")
        .kv("Market price", num(market_price))
        .kv("Implied vol", num(output.implied_vol.unwrap_or(f64::NAN)))
        .kv("Method", output.method.map(method_label).unwrap_or("unsolved"));

    Report::new(vec![summary, stage_section], &output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::analytical::price;
    use pricer_models::instruments::OptionType;

    fn contract(option_type: OptionType) -> ContractArgs {
        ContractArgs {
            spot: 100.0,
            strike: 110.0,
            expiry: 0.5,
            rate: 0.03,
            option_type,
        }
    }

    #[test]
    fn test_round_trip_auto() {
        let market = price(100.0, 110.0, 0.5, 0.03, 0.27, OptionType::Call);
        let report = run(
            market,
            &contract(OptionType::Call),
            IvMethod::Auto,
            &ImpliedVolConfig::default(),
        )
        .unwrap();

        let vol = report.json["implied_vol"].as_f64().unwrap();
        assert_relative_eq!(vol, 0.27, epsilon = 1e-3);
        assert_eq!(report.sections[1].rows.len(), 1);
    }

    #[test]
    fn test_bisection_only() {
        let market = price(100.0, 110.0, 0.5, 0.03, 0.4, OptionType::Put);
        let report = run(
            market,
            &contract(OptionType::Put),
            IvMethod::Bisection,
            &ImpliedVolConfig::default(),
        )
        .unwrap();

        assert_eq!(report.json["method"], "Bisection");
        assert_eq!(report.json["stages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_unreachable_price_is_unsolved() {
        let report = run(
            150.0,
            &contract(OptionType::Call),
            IvMethod::Auto,
            &ImpliedVolConfig::default(),
        )
        .unwrap();

        assert!(report.json["implied_vol"].is_null());
        assert_eq!(report.sections[0].rows[1][1], "NaN");
        assert_eq!(report.sections[1].rows.len(), 2);
    }

    #[test]
    fn test_newton_only_failure_reports_one_stage() {
        let report = run(
            150.0,
            &contract(OptionType::Call),
            IvMethod::Newton,
            &ImpliedVolConfig::default(),
        )
        .unwrap();

        assert_eq!(report.sections[1].rows.len(), 1);
        assert_eq!(report.sections[1].rows[0][0], "newton-raphson");
        assert_eq!(report.sections[0].rows[2][1], "unsolved");
    }

    #[test]
    fn test_non_positive_market_price_rejected() {
        let result = run(
            0.0,
            &contract(OptionType::Call),
            IvMethod::Auto,
            &ImpliedVolConfig::default(),
        );
        match result {
            Err(CliError::InvalidArgument(_)) => {}
            other => panic!("Expected InvalidArgument error, got {:?}", other.map(|_| ())),
        }
    }
}
