//! CLI configuration management
//!
//! Configuration is layered, highest priority first:
//! 1. Command-line flags
//! 2. Environment variables (`BSM_*`)
//! 3. Config file (`--config`, or `bsm.toml` in the working directory)
//! 4. Default values

use pricer_hedging::hedging::MAX_STEPS;
use pricer_hedging::HedgeConfig;
use pricer_models::volatility::ImpliedVolConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "bsm.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid solver setting: {0}")]
    InvalidSolver(String),

    #[error("Invalid hedging setting: {0}")]
    InvalidHedging(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels accepted by `--log-level`, `BSM_LOG_LEVEL` and the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// `[solver]` section: implied-volatility search settings
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Newton-Raphson starting volatility
    pub initial_vol: f64,
    /// Absolute price tolerance shared by both stages
    pub tolerance: f64,
    /// Iteration cap shared by both stages
    pub max_iterations: usize,
    /// Lower end of the bisection bracket
    pub vol_low: f64,
    /// Upper end of the bisection bracket
    pub vol_high: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        let defaults = ImpliedVolConfig::default();
        Self {
            initial_vol: defaults.initial_vol,
            tolerance: defaults.tolerance,
            max_iterations: defaults.max_iterations,
            vol_low: defaults.vol_low,
            vol_high: defaults.vol_high,
        }
    }
}

impl SolverSettings {
    /// Solver configuration with these settings applied over the defaults
    pub fn implied_vol_config(&self) -> ImpliedVolConfig {
        ImpliedVolConfig {
            initial_vol: self.initial_vol,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            vol_low: self.vol_low,
            vol_high: self.vol_high,
            ..ImpliedVolConfig::default()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(ConfigError::InvalidSolver(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidSolver(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.initial_vol > 0.0 && self.initial_vol.is_finite()) {
            return Err(ConfigError::InvalidSolver(format!(
                "initial_vol must be positive, got {}",
                self.initial_vol
            )));
        }
        if !(self.vol_low > 0.0 && self.vol_low < self.vol_high && self.vol_high.is_finite()) {
            return Err(ConfigError::InvalidSolver(format!(
                "bracket [{}, {}] must satisfy 0 < vol_low < vol_high",
                self.vol_low, self.vol_high
            )));
        }
        Ok(())
    }
}

/// `[hedging]` section: delta-hedging simulation settings
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HedgingSettings {
    /// Rebalancing steps per run
    pub n_steps: usize,
    /// Runs in a `hedge-stats` batch
    pub n_simulations: usize,
    /// Remaining maturity treated as expiry
    pub expiry_epsilon: f64,
}

impl Default for HedgingSettings {
    fn default() -> Self {
        let defaults = HedgeConfig::default();
        Self {
            n_steps: defaults.n_steps,
            n_simulations: pricer_hedging::batch::DEFAULT_SIMULATIONS,
            expiry_epsilon: defaults.expiry_epsilon,
        }
    }
}

impl HedgingSettings {
    /// Hedge configuration, optionally overriding the step count
    pub fn hedge_config(&self, n_steps: Option<usize>) -> HedgeConfig {
        HedgeConfig {
            n_steps: n_steps.unwrap_or(self.n_steps),
            expiry_epsilon: self.expiry_epsilon,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidHedging(format!(
                "n_steps must be in [1, {}], got {}",
                MAX_STEPS, self.n_steps
            )));
        }
        if self.n_simulations == 0 {
            return Err(ConfigError::InvalidHedging(
                "n_simulations must be at least 1".to_string(),
            ));
        }
        if !(self.expiry_epsilon >= 0.0 && self.expiry_epsilon.is_finite()) {
            return Err(ConfigError::InvalidHedging(format!(
                "expiry_epsilon must be non-negative, got {}",
                self.expiry_epsilon
            )));
        }
        Ok(())
    }
}

/// Effective `bsm` configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct CliConfig {
    /// Fallback log level when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Implied-volatility solver settings
    pub solver: SolverSettings,
    /// Hedging simulation settings
    pub hedging: HedgingSettings,
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply `BSM_*` overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply `BSM_*` overrides from an arbitrary lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("BSM_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(value) = lookup("BSM_NEWTON_MAX_ITERATIONS") {
            self.solver.max_iterations = parse_env("BSM_NEWTON_MAX_ITERATIONS", &value)?;
        }
        if let Some(value) = lookup("BSM_TOLERANCE") {
            self.solver.tolerance = parse_env("BSM_TOLERANCE", &value)?;
        }
        if let Some(value) = lookup("BSM_HEDGE_STEPS") {
            self.hedging.n_steps = parse_env("BSM_HEDGE_STEPS", &value)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, overrides: &ConfigOverrides) {
        if overrides.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.solver.validate()?;
        self.hedging.validate()
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not a valid value", key, value)))
}

/// Global flags that feed into configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Explicit config file path
    pub config_file: Option<PathBuf>,
    /// `--log-level`
    pub log_level: Option<LogLevel>,
    /// `--verbose`
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// An explicit `--config` path must exist; the default `bsm.toml` is read
/// only when present.
pub fn build_config(overrides: &ConfigOverrides) -> Result<CliConfig, ConfigError> {
    let mut config = match &overrides.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env()?;
    config.merge_with_cli(overrides);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.solver.initial_vol, 0.20);
        assert_eq!(config.solver.tolerance, 1e-6);
        assert_eq!(config.solver.max_iterations, 100);
        assert_eq!(config.solver.vol_low, 0.001);
        assert_eq!(config.solver.vol_high, 3.0);
        assert_eq!(config.hedging.n_steps, 252);
        assert_eq!(config.hedging.n_simulations, 100);
        assert_eq!(config.hedging.expiry_epsilon, 1e-4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn test_toml_deserialization() {
        let config = CliConfig::from_toml_str(
            r#"
            log_level = "debug"

            [solver]
            initial_vol = 0.3
            tolerance = 1e-8
            max_iterations = 50
            vol_low = 0.01
            vol_high = 2.0

            [hedging]
            n_steps = 52
            n_simulations = 500
            expiry_epsilon = 0.001
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.solver.initial_vol, 0.3);
        assert_eq!(config.solver.tolerance, 1e-8);
        assert_eq!(config.solver.max_iterations, 50);
        assert_eq!(config.solver.vol_low, 0.01);
        assert_eq!(config.solver.vol_high, 2.0);
        assert_eq!(config.hedging.n_steps, 52);
        assert_eq!(config.hedging.n_simulations, 500);
        assert_eq!(config.hedging.expiry_epsilon, 0.001);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config = CliConfig::from_toml_str("[hedging]\nn_steps = 12\n").unwrap();
        assert_eq!(config.hedging.n_steps, 12);
        assert_eq!(config.hedging.n_simulations, 100);
        assert_eq!(config.solver, SolverSettings::default());
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_invalid_toml_log_level() {
        match CliConfig::from_toml_str("log_level = \"loud\"") {
            Err(ConfigError::FileError(msg)) => assert!(msg.contains("loud")),
            other => panic!("Expected FileError, got {:?}", other),
        }
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env_with(lookup(&[
                ("BSM_LOG_LEVEL", "info"),
                ("BSM_NEWTON_MAX_ITERATIONS", "25"),
                ("BSM_TOLERANCE", "1e-9"),
                ("BSM_HEDGE_STEPS", "365"),
            ]))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.solver.max_iterations, 25);
        assert_eq!(config.solver.tolerance, 1e-9);
        assert_eq!(config.hedging.n_steps, 365);
    }

    #[test]
    fn test_env_parse_error() {
        let mut config = CliConfig::default();
        match config.apply_env_with(lookup(&[("BSM_HEDGE_STEPS", "daily")])) {
            Err(ConfigError::EnvError(msg)) => assert!(msg.contains("BSM_HEDGE_STEPS")),
            other => panic!("Expected EnvError, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let mut config = CliConfig::default();
        config.merge_with_cli(&ConfigOverrides {
            verbose: true,
            ..Default::default()
        });
        assert_eq!(config.log_level, LogLevel::Debug);

        config.merge_with_cli(&ConfigOverrides {
            verbose: true,
            log_level: Some(LogLevel::Trace),
            ..Default::default()
        });
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_validation() {
        let mut config = CliConfig::default();
        config.solver.vol_low = 4.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSolver(_))));

        let mut config = CliConfig::default();
        config.solver.tolerance = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSolver(_))));

        let mut config = CliConfig::default();
        config.hedging.n_steps = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidHedging(_))));

        let mut config = CliConfig::default();
        config.hedging.n_simulations = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidHedging(_))));
    }

    #[test]
    fn test_settings_conversion() {
        let mut config = CliConfig::default();
        config.solver.max_iterations = 40;
        config.hedging.expiry_epsilon = 0.0;

        let iv = config.solver.implied_vol_config();
        assert_eq!(iv.max_iterations, 40);
        assert_eq!(iv.vega_floor, ImpliedVolConfig::default().vega_floor);

        let hedge = config.hedging.hedge_config(Some(12));
        assert_eq!(hedge.n_steps, 12);
        assert_eq!(hedge.expiry_epsilon, 0.0);
        assert_eq!(config.hedging.hedge_config(None).n_steps, 252);
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let overrides = ConfigOverrides {
            config_file: Some(PathBuf::from("/nonexistent/bsm.toml")),
            ..Default::default()
        };
        assert!(matches!(build_config(&overrides), Err(ConfigError::FileError(_))));
    }
}
