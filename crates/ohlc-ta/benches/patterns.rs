//! Candlestick classifier benchmarks.
//!
//! Run with: `cargo bench -p ohlc-ta --bench patterns`
//!
//! Add `--features parallel` to measure the rayon path, which engages on
//! the larger sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ohlc_ta::indicators::candlestick::{
    bullish_engulfing, doji, hammer, hanging_man, morning_star, three_white_soldiers,
    PatternSettings,
};
use ohlc_ta::Result;

type Bars = (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>);
type Classifier = fn(&[f64], &[f64], &[f64], &[f64], &PatternSettings) -> Result<Vec<bool>>;

/// Deterministic bars whose bodies and shadows vary enough to hit every
/// branch of the classifiers.
fn generate_bars(size: usize) -> Bars {
    let mut open = Vec::with_capacity(size);
    let mut high = Vec::with_capacity(size);
    let mut low = Vec::with_capacity(size);
    let mut close = Vec::with_capacity(size);

    let mut price = 100.0_f64;
    for i in 0..size {
        let x = i as f64;
        price = (price + (x * 0.1).sin() * 1.5).max(10.0);
        let o = price + (x * 0.7).sin() * 1.2;
        let c = price + (x * 0.9).cos() * 1.2;
        high.push(o.max(c) + (x * 0.31).sin().abs() * 1.5);
        low.push(o.min(c) - (x * 0.17).cos().abs() * 1.5);
        open.push(o);
        close.push(c);
    }

    (open, high, low, close)
}

const SIZES: &[usize] = &[1_000, 10_000, 100_000, 1_000_000];

const CLASSIFIERS: &[(&str, Classifier)] = &[
    ("doji", doji::<f64>),
    ("hammer", hammer::<f64>),
    ("hanging_man", hanging_man::<f64>),
    ("bullish_engulfing", bullish_engulfing::<f64>),
    ("morning_star", morning_star::<f64>),
    ("three_white_soldiers", three_white_soldiers::<f64>),
];

fn bench_classifiers(c: &mut Criterion) {
    let settings = PatternSettings::default();
    for &(name, classify) in CLASSIFIERS {
        let mut group = c.benchmark_group(name);
        for &size in SIZES {
            let bars = generate_bars(size);
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(size),
                &bars,
                |b, (o, h, l, cl)| {
                    b.iter(|| {
                        classify(
                            black_box(o),
                            black_box(h),
                            black_box(l),
                            black_box(cl),
                            black_box(&settings),
                        )
                    })
                },
            );
        }
        group.finish();
    }
}

criterion_group!(benches, bench_classifiers);
criterion_main!(benches);
