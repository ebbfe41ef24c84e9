//! Smile command implementation
//!
//! Reads quotes from CSV (`strike,price,option_type`) or prices a synthetic
//! strip off a quadratic smile, then inverts every quote.

use pricer_models::instruments::OptionType;
use pricer_models::volatility::smile::{
    analyze_smile, smile_metrics, synthetic_quotes, QuadraticSmile,
};
use pricer_models::volatility::{ImpliedVolConfig, SmileMetrics, SmilePoint, SmileQuote};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::output::{num, opt_num, Report, Section};
use crate::{CliError, Result};

/// Where the smile quotes come from
#[derive(Debug, Clone)]
pub enum QuoteSource<'a> {
    /// CSV file with a `strike,price,option_type` header
    File(&'a Path),
    /// Synthetic quadratic smile
    Synthetic(QuadraticSmile),
}

#[derive(Debug, Deserialize)]
struct QuoteRecord {
    strike: f64,
    price: f64,
    option_type: String,
}

#[derive(Debug, Serialize)]
struct SmileOutput {
    spot: f64,
    expiry: f64,
    rate: f64,
    points: Vec<SmilePoint>,
    true_vols: Option<Vec<f64>>,
    metrics: Option<SmileMetrics>,
}

/// Parse quotes from CSV text.
pub fn read_quotes<R: Read>(reader: R) -> Result<Vec<SmileQuote>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut quotes = Vec::new();
    for record in csv_reader.deserialize::<QuoteRecord>() {
        let record = record.map_err(|e| CliError::InvalidArgument(format!("bad quote row: {}", e)))?;
        let option_type: OptionType = record.option_type.parse()?;
        quotes.push(SmileQuote {
            strike: record.strike,
            price: record.price,
            option_type,
        });
    }

    if quotes.is_empty() {
        return Err(CliError::InvalidArgument(
            "quote file contains no rows".to_string(),
        ));
    }
    Ok(quotes)
}

/// Run the smile command
pub fn run(
    spot: f64,
    expiry: f64,
    rate: f64,
    source: QuoteSource<'_>,
    config: &ImpliedVolConfig,
) -> Result<Report> {
    if !(spot > 0.0 && spot.is_finite()) || !(expiry > 0.0 && expiry.is_finite()) {
        return Err(CliError::InvalidArgument(format!(
            "spot and expiry must be positive, got S = {}, T = {}",
            spot, expiry
        )));
    }

    let (quotes, true_vols) = match source {
        QuoteSource::File(path) => {
            let file = std::fs::File::open(path)?;
            (read_quotes(file)?, None)
        }
        QuoteSource::Synthetic(smile) => {
            let synthetic = synthetic_quotes(spot, expiry, rate, &smile, None);
            let mut by_strike: Vec<(f64, f64)> =
                synthetic.iter().map(|q| (q.quote.strike, q.true_vol)).collect();
            by_strike.sort_by(|a, b| a.0.total_cmp(&b.0));
            (
                synthetic.into_iter().map(|q| q.quote).collect(),
                Some(by_strike.into_iter().map(|(_, v)| v).collect::<Vec<f64>>()),
            )
        }
    };

    let points = analyze_smile(&quotes, spot, expiry, rate, config);
    let metrics = smile_metrics(&points);

    let unsolved = points.iter().filter(|p| p.implied_vol.is_nan()).count();
    if unsolved > 0 {
        warn!(unsolved, total = points.len(), "some quotes have no implied volatility");
    }
    info!(quotes = points.len(), "analysed smile");

    let mut headers = vec!["Strike", "K/S", "Type", "Price", "Implied vol"];
    if true_vols.is_some() {
        headers.push("True vol");
    }
    let mut smile_section = Section::new("Volatility smile", &headers);
    for (i, point) in points.iter().enumerate() {
        let mut row = vec![
            format!("{:.2}", point.strike),
            format!("{:.4}", point.moneyness),
            point.option_type.to_string(),
            num(point.price),
            num(point.implied_vol),
        ];
        if let Some(vols) = &true_vols {
            row.push(vols.get(i).copied().map(num).unwrap_or_default());
        }
        smile_section.push_row(row);
    }

    let mut sections = vec![smile_section];
    if let Some(m) = &metrics {
        sections.push(
            Section::key_value("Smile metrics")
                .kv("ATM vol", num(m.atm_vol))
                .kv("OTM put vol (K/S < 0.90)", opt_num(m.otm_put_vol))
                .kv("OTM call vol (K/S > 1.10)", opt_num(m.otm_call_vol))
                .kv("Skew (put − ATM)", opt_num(m.skew))
                .kv("Curvature", opt_num(m.smile_curvature))
                .kv("Vol range", num(m.vol_range)),
        );
    }

    let output = SmileOutput {
        spot,
        expiry,
        rate,
        points,
        true_vols,
        metrics,
    };

    Report::new(sections, &output)
}
