//! Price command implementation

use pricer_models::analytical::{put_call_parity_check, BlackScholes, ParityCheck};
use pricer_models::instruments::{OptionSpec, OptionType};
use serde::Serialize;
use tracing::info;

use crate::cli::ContractArgs;
use crate::output::{num, Report, Section};
use crate::Result;

#[derive(Debug, Serialize)]
struct PriceOutput {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
    price: f64,
    intrinsic: f64,
    time_value: f64,
    d1: f64,
    d2: f64,
    parity: Option<ParityCheck>,
}

/// Run the price command
pub fn run(contract: &ContractArgs, volatility: f64, parity: bool) -> Result<Report> {
    let params = contract.market_parameters(volatility)?;
    let spec = OptionSpec::new(params, contract.option_type);
    let model = BlackScholes::from_params(&params);
    let (strike, expiry) = (params.strike(), params.expiry());

    let price = spec.price();
    let intrinsic = spec.intrinsic();
    let d1 = model.d1(strike, expiry);
    let d2 = model.d2(strike, expiry);

    info!(
        option_type = %contract.option_type,
        spot = params.spot(),
        strike,
        price,
        "priced option"
    );

    let parity = parity.then(|| {
        put_call_parity_check(
            params.spot(),
            strike,
            expiry,
            params.rate(),
            model.price_call(strike, expiry),
            model.price_put(strike, expiry),
        )
    });

    let mut section = Section::key_value(format!("{} option", contract.option_type))
        .kv("Price", num(price))
        .kv("Intrinsic value", num(intrinsic))
        .kv("Time value", num(price - intrinsic))
        .kv("d1", num(d1))
        .kv("d2", num(d2))
        .kv("Moneyness (K/S)", num(params.moneyness()));

    if let Some(check) = &parity {
        section = section
            .kv("Parity C + Ke^(-rT)", num(check.left_side))
            .kv("Parity P + S", num(check.right_side))
            .kv("Parity verdict", check.message.as_str());
    }

    let output = PriceOutput {
        spot: params.spot(),
        strike,
        expiry,
        rate: params.rate(),
        volatility: params.volatility(),
        option_type: contract.option_type,
        price,
        intrinsic,
        time_value: price - intrinsic,
        d1,
        d2,
        parity,
    };

    Report::new(vec![section], &output)
}
