//! Throughput benchmarks for the indicator kernels.
//!
//! Run with: `cargo bench -p ohlc-ta --bench indicators`
//!
//! Every kernel is a single pass, so time per element should stay flat as
//! the input grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ohlc_ta::indicators::{
    ad, adx, atr, beta, bollinger, cci, donchian, ema, keltner, macd, mfi, obv, rsi, sma,
    stochastic, vwap, williams_r, wma, zscore,
};
use ohlc_ta::registry::{compute, Inputs, Params};

const SIZES: &[usize] = &[100, 1_000, 10_000, 100_000];

/// One synthetic market per size.
struct Market {
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    volume: Vec<f64>,
}

impl Market {
    /// Deterministic bars with a drifting oscillation.
    fn new(size: usize) -> Self {
        let mut high = Vec::with_capacity(size);
        let mut low = Vec::with_capacity(size);
        let mut close = Vec::with_capacity(size);
        let mut volume = Vec::with_capacity(size);

        let mut price = 100.0_f64;
        for i in 0..size {
            let x = i as f64;
            let prev = price;
            price = (price + (x * 0.1).sin() * 2.0 + (x * 0.03).cos() * 1.5).max(10.0);
            high.push(prev.max(price) + 0.5 + (x * 0.07).sin().abs());
            low.push(prev.min(price) - 0.5 - (x * 0.05).cos().abs());
            close.push(price);
            volume.push(1_000_000.0 + (x * 0.9).sin().abs() * 500_000.0);
        }

        Self {
            high,
            low,
            close,
            volume,
        }
    }
}

/// Benchmarks `run` for every size under the group `name`.
fn bench_group<R>(c: &mut Criterion, name: &str, run: impl Fn(&Market) -> R) {
    let mut group = c.benchmark_group(name);
    for &size in SIZES {
        let market = Market::new(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &market, |b, m| {
            b.iter(|| run(black_box(m)));
        });
    }
    group.finish();
}

fn bench_trend(c: &mut Criterion) {
    bench_group(c, "sma", |m| sma(&m.close, 20));
    bench_group(c, "ema", |m| ema(&m.close, 20));
    bench_group(c, "wma", |m| wma(&m.close, 20));
    bench_group(c, "macd", |m| macd(&m.close, 12, 26, 9));
    bench_group(c, "adx", |m| adx(&m.high, &m.low, &m.close, 14));
}

fn bench_volatility(c: &mut Criterion) {
    bench_group(c, "atr", |m| atr(&m.high, &m.low, &m.close, 14));
    bench_group(c, "bollinger", |m| bollinger(&m.close, 20, 2.0));
    bench_group(c, "keltner", |m| keltner(&m.high, &m.low, &m.close, 20, 10, 2.0));
    bench_group(c, "donchian", |m| donchian(&m.high, &m.low, 20));
}

fn bench_momentum(c: &mut Criterion) {
    bench_group(c, "rsi", |m| rsi(&m.close, 14));
    bench_group(c, "stochastic", |m| stochastic(&m.high, &m.low, &m.close, 14, 3, 3));
    bench_group(c, "williams_r", |m| williams_r(&m.high, &m.low, &m.close, 14));
    bench_group(c, "cci", |m| cci(&m.high, &m.low, &m.close, 20));
}

fn bench_volume(c: &mut Criterion) {
    bench_group(c, "obv", |m| obv(&m.close, &m.volume));
    bench_group(c, "ad", |m| ad(&m.high, &m.low, &m.close, &m.volume));
    bench_group(c, "vwap", |m| vwap(&m.high, &m.low, &m.close, &m.volume));
    bench_group(c, "mfi", |m| mfi(&m.high, &m.low, &m.close, &m.volume, 14));
}

fn bench_statistics(c: &mut Criterion) {
    bench_group(c, "zscore", |m| zscore(&m.close, 20));
    // high as a stand-in benchmark series
    bench_group(c, "beta", |m| beta(&m.close, &m.high, 60));
}

/// Name lookup plus dispatch on top of the kernel itself.
fn bench_registry(c: &mut Criterion) {
    let params = Params::new();
    bench_group(c, "registry_rsi", |m| {
        compute("rsi", &Inputs::new().close(m.close.as_slice()), &params)
    });
}

criterion_group!(
    benches,
    bench_trend,
    bench_volatility,
    bench_momentum,
    bench_volume,
    bench_statistics,
    bench_registry,
);

criterion_main!(benches);
