//! # bsm - Black-Scholes-Merton command line
//!
//! Operational front end for the pricing, implied-volatility and hedging
//! crates.
//!
//! # Commands
//!
//! - `bsm price` - Price a European option
//! - `bsm greeks` - Compute the five Greeks
//! - `bsm implied-vol` - Invert a market price
//! - `bsm smile` - Analyse a volatility smile
//! - `bsm hedge` - Simulate one delta-hedging run
//! - `bsm hedge-stats` - Hedging error statistics over many runs
//! - `bsm check` - Show the effective configuration
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate owns configuration, logging setup
//! and output formats; the library crates own all computation.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

use cli::Commands;
use config::CliConfig;
use pricer_models::volatility::smile::QuadraticSmile;

/// Execute a parsed command against the effective configuration
pub fn execute(command: &Commands, config: &CliConfig) -> Result<output::Report> {
    match command {
        Commands::Price {
            contract,
            volatility,
            parity,
        } => commands::price::run(contract, *volatility, *parity),
        Commands::Greeks {
            contract,
            volatility,
        } => commands::greeks::run(contract, *volatility),
        Commands::ImpliedVol {
            market_price,
            contract,
            method,
        } => commands::implied_vol::run(
            *market_price,
            contract,
            *method,
            &config.solver.implied_vol_config(),
        ),
        Commands::Smile {
            spot,
            expiry,
            rate,
            quotes,
            base_vol,
            skew,
            convexity,
        } => {
            let source = match quotes {
                Some(path) => commands::smile::QuoteSource::File(path),
                None => commands::smile::QuoteSource::Synthetic(QuadraticSmile {
                    base_vol: *base_vol,
                    skew: *skew,
                    convexity: *convexity,
                    ..QuadraticSmile::default()
                }),
            };
            commands::smile::run(
                *spot,
                *expiry,
                *rate,
                source,
                &config.solver.implied_vol_config(),
            )
        }
        Commands::Hedge {
            contract,
            volatility,
            steps,
            seed,
            states,
        } => commands::hedge::run(
            contract,
            *volatility,
            &config.hedging.hedge_config(*steps),
            *seed,
            *states,
        ),
        Commands::HedgeStats {
            contract,
            volatility,
            steps,
            simulations,
        } => commands::hedge_stats::run(
            contract,
            *volatility,
            &config.hedging.hedge_config(*steps),
            simulations.unwrap_or(config.hedging.n_simulations),
        ),
        Commands::Check => commands::check::run(config),
    }
}
