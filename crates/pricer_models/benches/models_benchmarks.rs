//! Criterion benchmarks for pricer_models.
//!
//! Measures closed-form pricing, the bundled Greeks against five separate
//! calls, and the implied-volatility chain across moneyness.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::{greeks, price};
use pricer_models::instruments::OptionType;
use pricer_models::volatility::{implied_volatility, ImpliedVolConfig};

fn bench_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes");

    group.bench_function("price_call", |b| {
        b.iter(|| {
            price(
                black_box(100.0),
                black_box(105.0),
                black_box(0.5),
                0.03,
                0.25,
                OptionType::Call,
            )
        });
    });

    group.bench_function("all_greeks", |b| {
        b.iter(|| {
            greeks::all_greeks(
                black_box(100.0),
                black_box(105.0),
                black_box(0.5),
                0.03,
                0.25,
                OptionType::Call,
            )
        });
    });

    group.bench_function("separate_greeks", |b| {
        b.iter(|| {
            let (s, k, t) = (black_box(100.0), black_box(105.0), black_box(0.5));
            (
                greeks::delta(s, k, t, 0.03, 0.25, OptionType::Call),
                greeks::gamma(s, k, t, 0.03, 0.25),
                greeks::vega(s, k, t, 0.03, 0.25),
                greeks::theta(s, k, t, 0.03, 0.25, OptionType::Call),
                greeks::rho(s, k, t, 0.03, 0.25, OptionType::Call),
            )
        });
    });

    group.finish();
}

fn bench_implied_vol(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_vol");
    let config = ImpliedVolConfig::default();

    for strike in [70.0, 100.0, 130.0] {
        let market = price(100.0, strike, 0.5, 0.03, 0.35, OptionType::Call);
        group.bench_with_input(BenchmarkId::new("chain", strike), &market, |b, &market| {
            b.iter(|| {
                implied_volatility(
                    black_box(market),
                    100.0,
                    strike,
                    0.5,
                    0.03,
                    OptionType::Call,
                    &config,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pricing, bench_implied_vol);
criterion_main!(benches);
