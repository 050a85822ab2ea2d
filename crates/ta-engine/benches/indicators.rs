//! Throughput benchmarks for ta-engine indicators.
//!
//! Run with: `cargo bench -p ta-engine`
//!
//! Each indicator is measured across input sizes to confirm O(n) scaling.
//! Construction includes the full computation; the accessor benchmarks
//! measure the fill pass on top of it.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ta_engine::indicators::{Bollinger, Macd, Roc, Rsi, Tsi};
use ta_engine::math::{ema, sma};
use ta_engine::batch::BatchProcessor;
use ta_engine::panel::Panel;

/// Generate a deterministic price series.
fn generate_series(size: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(size);
    let mut price = 100.0;
    for i in 0..size {
        let delta = ((i as f64 * 0.1).sin() * 2.0) + ((i as f64 * 0.03).cos() * 1.5);
        price += delta;
        price = price.max(10.0);
        data.push(price);
    }
    data
}

const SIZES: &[usize] = &[100, 1_000, 10_000, 100_000];

fn bench_moving_averages(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_averages");
    for &size in SIZES {
        let data = generate_series(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sma", size), &data, |b, data| {
            b.iter(|| sma(black_box(data), black_box(20), false));
        });
        group.bench_with_input(BenchmarkId::new("ema", size), &data, |b, data| {
            b.iter(|| ema(black_box(data), black_box(20), false));
        });
    }
    group.finish();
}

fn bench_bollinger(c: &mut Criterion) {
    let mut group = c.benchmark_group("bollinger");
    for &size in SIZES {
        let data = generate_series(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let bb = Bollinger::new().fillna(true).compute(black_box(data)).unwrap();
                (bb.hband(), bb.lband(), bb.pband())
            });
        });
    }
    group.finish();
}

fn bench_oscillators(c: &mut Criterion) {
    let mut group = c.benchmark_group("oscillators");
    for &size in SIZES {
        let data = generate_series(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("rsi", size), &data, |b, data| {
            b.iter(|| Rsi::new().compute(black_box(data)).unwrap().rsi());
        });
        group.bench_with_input(BenchmarkId::new("macd", size), &data, |b, data| {
            b.iter(|| {
                let macd = Macd::new().compute(black_box(data)).unwrap();
                (macd.macd(), macd.macd_signal(), macd.macd_diff())
            });
        });
        group.bench_with_input(BenchmarkId::new("roc", size), &data, |b, data| {
            b.iter(|| Roc::new().compute(black_box(data)).unwrap().roc());
        });
        group.bench_with_input(BenchmarkId::new("tsi", size), &data, |b, data| {
            b.iter(|| Tsi::new().compute(black_box(data)).unwrap().tsi());
        });
    }
    group.finish();
}

fn bench_panel_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("panel_batch");
    let symbols: Vec<Vec<f64>> = (0..128).map(|k| generate_series(2_000 + k)).collect();
    let panel = Panel::new().fillna(true);

    group.bench_function("sequential", |b| {
        let processor = BatchProcessor::new().min_parallel_threshold(usize::MAX);
        b.iter(|| processor.process_panel(&panel, black_box(&symbols)).unwrap());
    });
    group.bench_function("parallel", |b| {
        let processor = BatchProcessor::new().min_parallel_threshold(1);
        b.iter(|| processor.process_panel(&panel, black_box(&symbols)).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_moving_averages,
    bench_bollinger,
    bench_oscillators,
    bench_panel_batch
);
criterion_main!(benches);
