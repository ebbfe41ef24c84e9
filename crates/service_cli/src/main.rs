//! `bsm` binary entry point

use clap::Parser;
use std::str::FromStr;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use service_cli::cli::Cli;
use service_cli::config::{build_config, ConfigOverrides, LogLevel};
use service_cli::{execute, Result};

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        config_file: cli.config.clone(),
        log_level: cli.log_level.as_deref().map(LogLevel::from_str).transpose()?,
        verbose: cli.verbose,
    };
    let config = build_config(&overrides)?;

    init_tracing(config.log_level);
    debug!(?config, "configuration loaded");

    let report = execute(&cli.command, &config)?;
    println!("{}", report.render(cli.format)?);
    Ok(())
}
