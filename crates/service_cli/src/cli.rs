//! Command-line definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use pricer_models::instruments::{MarketParameters, OptionType};
use std::path::PathBuf;

use crate::output::OutputFormat;
use crate::Result;

/// Black-Scholes-Merton pricing, implied volatility and delta-hedging CLI
#[derive(Parser, Debug)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (defaults to ./bsm.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Contract terms shared by every per-option command
#[derive(Args, Debug, Clone)]
pub struct ContractArgs {
    /// Spot price S
    #[arg(short, long)]
    pub spot: f64,

    /// Strike K
    #[arg(short = 'k', long)]
    pub strike: f64,

    /// Time to expiry T in years
    #[arg(short = 't', long)]
    pub expiry: f64,

    /// Continuously compounded risk-free rate r
    #[arg(short, long, default_value_t = 0.05, allow_negative_numbers = true)]
    pub rate: f64,

    /// Option type (call/put, c/p)
    #[arg(long = "type", default_value = "call")]
    pub option_type: OptionType,
}

impl ContractArgs {
    /// Validated market parameters at the given volatility
    pub fn market_parameters(&self, volatility: f64) -> Result<MarketParameters> {
        Ok(MarketParameters::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            volatility,
        )?)
    }
}

/// Implied-volatility method selected with `--method`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IvMethod {
    /// Newton-Raphson, falling back to bisection
    #[default]
    Auto,
    /// Newton-Raphson only
    Newton,
    /// Bisection only
    Bisection,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a European option
    Price {
        #[command(flatten)]
        contract: ContractArgs,

        /// Volatility σ
        #[arg(long = "vol")]
        volatility: f64,

        /// Also check put-call parity on the model prices
        #[arg(long)]
        parity: bool,
    },

    /// Compute delta, gamma, vega, theta and rho
    Greeks {
        #[command(flatten)]
        contract: ContractArgs,

        /// Volatility σ
        #[arg(long = "vol")]
        volatility: f64,
    },

    /// Invert a market price into an implied volatility
    ImpliedVol {
        /// Observed option price
        #[arg(short = 'm', long)]
        market_price: f64,

        #[command(flatten)]
        contract: ContractArgs,

        /// Solver stage(s) to run
        #[arg(long, value_enum, default_value_t = IvMethod::Auto)]
        method: IvMethod,
    },

    /// Analyse a volatility smile from quotes or a synthetic quadratic smile
    Smile {
        /// Spot price S
        #[arg(short, long)]
        spot: f64,

        /// Time to expiry T in years
        #[arg(short = 't', long)]
        expiry: f64,

        /// Continuously compounded risk-free rate r
        #[arg(short, long, default_value_t = 0.05, allow_negative_numbers = true)]
        rate: f64,

        /// CSV of quotes with columns strike,price,option_type
        #[arg(short, long)]
        quotes: Option<PathBuf>,

        /// Synthetic smile: ATM volatility
        #[arg(long, default_value_t = 0.20)]
        base_vol: f64,

        /// Synthetic smile: linear coefficient in (K/S − 1)
        #[arg(long, default_value_t = -0.10, allow_negative_numbers = true)]
        skew: f64,

        /// Synthetic smile: quadratic coefficient in (K/S − 1)
        #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
        convexity: f64,
    },

    /// Simulate delta hedging of a short option along one GBM path
    Hedge {
        #[command(flatten)]
        contract: ContractArgs,

        /// Volatility σ
        #[arg(long = "vol")]
        volatility: f64,

        /// Rebalancing steps (defaults to the configured value)
        #[arg(long)]
        steps: Option<usize>,

        /// Seed for a reproducible path
        #[arg(long)]
        seed: Option<u64>,

        /// Print every portfolio state, not just the summary
        #[arg(long)]
        states: bool,
    },

    /// Hedging error statistics over many seeded runs
    HedgeStats {
        #[command(flatten)]
        contract: ContractArgs,

        /// Volatility σ
        #[arg(long = "vol")]
        volatility: f64,

        /// Rebalancing steps per run (defaults to the configured value)
        #[arg(long)]
        steps: Option<usize>,

        /// Number of runs (defaults to the configured value)
        #[arg(short = 'n', long)]
        simulations: Option<usize>,
    },

    /// Show the effective configuration
    Check,
}
