//! Performance benchmarks for equity-strategies
//!
//! Run with: `cargo bench`
//! View results: `open target/criterion/report/index.html`

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use equity_strategies::{indicators, Backtester, Config, PricePoint, PriceSeries};

fn make_series(bars: usize) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let points = (0..bars)
        .map(|i| {
            // deterministic oscillating uptrend
            let close = 100.0 + 0.05 * i as f64 + 5.0 * ((i as f64) * 0.1).sin();
            PricePoint::new(start + chrono::Days::new(i as u64), close)
        })
        .collect();
    PriceSeries::new(points).unwrap()
}

fn benchmark_indicators(c: &mut Criterion) {
    let closes = make_series(2520).closes();

    c.bench_function("sma_200", |b| {
        b.iter(|| indicators::sma(black_box(&closes), 200))
    });
    c.bench_function("ema_26", |b| {
        b.iter(|| indicators::ema(black_box(&closes), 26))
    });
    c.bench_function("rsi_14", |b| {
        b.iter(|| indicators::rsi(black_box(&closes), 14))
    });
}

fn benchmark_backtest(c: &mut Criterion) {
    // Ten years of daily bars through the full pipeline
    let series = make_series(2520);
    let backtester = Backtester::from_config(Config::default()).unwrap();

    c.bench_function("sma_crossover_full_backtest", |b| {
        b.iter(|| backtester.run(black_box(&series)).unwrap())
    });
}

criterion_group!(benches, benchmark_indicators, benchmark_backtest);
criterion_main!(benches);
