//! End-to-end command tests: parse arguments, execute, render.

use clap::Parser;
use service_cli::cli::Cli;
use service_cli::config::CliConfig;
use service_cli::execute;
use service_cli::output::OutputFormat;

fn run_args(args: &[&str]) -> (String, OutputFormat) {
    let cli = Cli::try_parse_from(args).unwrap();
    let report = execute(&cli.command, &CliConfig::default()).unwrap();
    (report.render(cli.format).unwrap(), cli.format)
}

#[test]
fn test_price_table() {
    let (out, format) = run_args(&[
        "bsm", "price", "-s", "42", "-k", "40", "-t", "0.5", "-r", "0.1", "--vol", "0.2",
    ]);
    assert_eq!(format, OutputFormat::Table);
    assert!(out.contains("call option"));
    assert!(out.contains("4.759"));
}

#[test]
fn test_greeks_json() {
    let (out, _) = run_args(&[
        "bsm", "greeks", "-s", "100", "-k", "100", "-t", "1", "--vol", "0.2", "--type", "put",
        "-f", "json",
    ]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let delta = parsed["greeks"]["delta"].as_f64().unwrap();
    assert!((delta - (0.6368306511756191 - 1.0)).abs() < 1e-9);
}

#[test]
fn test_implied_vol_csv() {
    let (out, _) = run_args(&[
        "bsm",
        "implied-vol",
        "-m",
        "4.759422392871535",
        "-s",
        "42",
        "-k",
        "40",
        "-t",
        "0.5",
        "-r",
        "0.1",
        "--format",
        "csv",
    ]);
    let first_block: Vec<&str> = out.split("\n\n").next().unwrap().lines().collect();
    assert_eq!(first_block[0], "Metric,Value");
    assert!(first_block[2].starts_with("Implied vol,0.200"));
}

#[test]
fn test_hedge_stats_runs() {
    let (out, _) = run_args(&[
        "bsm",
        "hedge-stats",
        "-s",
        "100",
        "-k",
        "100",
        "-t",
        "1",
        "--vol",
        "0.2",
        "--steps",
        "20",
        "-n",
        "10",
        "--format",
        "json",
    ]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["n_simulations"], 10);
}

#[test]
fn test_smile_synthetic_table() {
    let (out, _) = run_args(&["bsm", "smile", "-s", "100", "-t", "0.5"]);
    assert!(out.contains("Volatility smile"));
    assert!(out.contains("Smile metrics"));
}

#[test]
fn test_check_uses_supplied_config() {
    let cli = Cli::try_parse_from(["bsm", "check", "--format", "json"]).unwrap();
    let config = CliConfig::from_toml_str("[hedging]\nn_steps = 52\n").unwrap();
    let report = execute(&cli.command, &config).unwrap();
    assert_eq!(report.json["hedging"]["n_steps"], 52);
}
