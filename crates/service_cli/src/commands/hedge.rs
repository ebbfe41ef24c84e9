//! Hedge command implementation

use pricer_hedging::rng::PricerRng;
use pricer_hedging::{simulate_hedge_with, HedgeConfig, HedgeState, HedgeSummary};
use pricer_models::instruments::OptionSpec;
use serde::Serialize;
use tracing::info;

use crate::cli::ContractArgs;
use crate::output::{num, Report, Section};
use crate::Result;

#[derive(Debug, Serialize)]
struct HedgeOutput {
    seed: u64,
    n_steps: usize,
    summary: HedgeSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    states: Option<Vec<HedgeState>>,
}

/// Run the hedge command
///
/// Without a seed the path is drawn from entropy; the seed actually used is
/// reported so the run can be replayed.
pub fn run(
    contract: &ContractArgs,
    volatility: f64,
    config: &HedgeConfig,
    seed: Option<u64>,
    show_states: bool,
) -> Result<Report> {
    let params = contract.market_parameters(volatility)?;
    let spec = OptionSpec::new(params, contract.option_type);
    let mut rng = PricerRng::from_optional_seed(seed);
    let seed = rng.seed();

    let run = simulate_hedge_with(&spec, config, &mut rng)?;
    let s = run.summary;

    info!(
        seed,
        n_steps = config.n_steps,
        hedging_error = s.hedging_error,
        "hedge simulation complete"
    );

    let mut sections = vec![Section::key_value(format!(
        "Short {} delta hedge ({} steps, seed {})",
        contract.option_type, config.n_steps, seed
    ))
    .kv("Option premium", num(s.option_premium))
    .kv("Final stock price", num(s.final_stock_price))
    .kv("Option payoff", num(s.option_payoff))
    .kv("Theoretical P&L", num(s.theoretical_pnl))
    .kv("Hedge portfolio value", num(s.hedge_portfolio_value))
    .kv("Hedging error", num(s.hedging_error))
    .kv("Error (% of premium)", format!("{:.2}", s.error_percent))];

    if show_states {
        let mut states = Section::new(
            "Portfolio states",
            &["Time", "Stock", "Delta", "Shares", "Option", "Cash", "Portfolio"],
        );
        for st in &run.states {
            states.push_row([
                format!("{:.4}", st.time),
                num(st.stock_price),
                num(st.delta),
                num(st.shares_held),
                num(st.option_value),
                num(st.cash),
                num(st.portfolio_value),
            ]);
        }
        sections.push(states);
    }

    let output = HedgeOutput {
        seed,
        n_steps: config.n_steps,
        summary: s,
        states: show_states.then_some(run.states),
    };

    Report::new(sections, &output)
}
