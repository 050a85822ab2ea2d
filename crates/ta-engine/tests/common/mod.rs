//! Shared test utilities for ta-engine tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Approximate equality check for floating-point values.
///
/// Two NaN values are considered equal for testing purposes.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-8;

/// Count the leading run of NaN values.
#[allow(dead_code)]
pub fn count_nan_prefix(data: &[f64]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}

/// Bit patterns of a slice, for exact reproducibility checks.
#[allow(dead_code)]
pub fn bits(data: &[f64]) -> Vec<u64> {
    data.iter().map(|v| v.to_bits()).collect()
}

/// Seeded geometric random walk that stays positive.
#[allow(dead_code)]
pub fn random_walk(seed: u64, len: usize, start: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut price = start;
    (0..len)
        .map(|_| {
            let step: f64 = rng.gen_range(-0.02..0.02);
            price *= 1.0 + step;
            price
        })
        .collect()
}

/// The RSI scenario series: a short dip followed by a steady climb.
#[allow(dead_code)]
pub fn dip_then_climb() -> Vec<f64> {
    vec![
        10.0, 11.0, 12.0, 11.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0, 20.0,
        21.0, 22.0, 23.0, 24.0, 25.0,
    ]
}

/// Installs a test-writer tracing subscriber once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ta_engine=trace")),
        )
        .with_test_writer()
        .try_init();
}
