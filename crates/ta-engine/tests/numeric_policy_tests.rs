//! Numeric policy compliance tests.
//!
//! These tests pin down how each indicator treats division by zero, missing
//! input and the fill policy. The zero-denominator rules differ between
//! indicators on purpose:
//!
//! - RSI: zero average loss yields 100
//! - TSI and Bollinger percent-band: 0/0 stays NaN, then the fill policy
//!   may neutralize it
//! - ROC: a zero reference price yields ±inf (or NaN for 0/0)

#![allow(clippy::needless_range_loop)]
#![allow(clippy::float_cmp)]

mod common;

use common::{approx_eq, EPSILON};
use ta_engine::fill::FillPolicy;
use ta_engine::indicators::{
    BollingerBands, MacdIndicator, RocIndicator, RsiIndicator, TsiIndicator,
};
use ta_engine::math::{ema, sma};

// ==================== Zero-denominator asymmetry ====================

#[test]
fn numeric_policy_flat_prices_rsi_is_100() {
    let close = vec![25.0_f64; 40];
    let rsi = RsiIndicator::new(&close, 14, false).unwrap().rsi();
    assert!(rsi.values()[13..].iter().all(|&v| v == 100.0));
}

#[test]
fn numeric_policy_flat_prices_tsi_is_nan() {
    let close = vec![25.0_f64; 60];
    let tsi = TsiIndicator::new(&close, 25, 13, false).unwrap().tsi();
    assert_eq!(tsi.count_missing(), 60);
}

#[test]
fn numeric_policy_flat_prices_pband_is_nan() {
    let close = vec![25.0_f64; 30];
    let pband = BollingerBands::new(&close, 20, 2.0, false).unwrap().pband();
    assert_eq!(pband.count_missing(), 30);
}

#[test]
fn numeric_policy_flat_prices_filled() {
    let close = vec![25.0_f64; 60];
    let rsi = RsiIndicator::new(&close, 14, true).unwrap().rsi();
    let tsi = TsiIndicator::new(&close, 25, 13, true).unwrap().tsi();
    let pband = BollingerBands::new(&close, 20, 2.0, true).unwrap().pband();

    // RSI never needed the fill; TSI and pband take their neutral value
    assert!(rsi.iter().all(|&v| v == 100.0));
    assert!(tsi.iter().all(|&v| v == 0.0));
    assert!(pband.iter().all(|&v| v == 0.0));
}

#[test]
fn numeric_policy_flat_prices_bands_collapse() {
    let close = vec![25.0_f64; 30];
    let bb = BollingerBands::new(&close, 20, 2.0, false).unwrap();
    for i in 19..30 {
        assert_eq!(bb.mavg()[i], 25.0);
        assert_eq!(bb.std_dev()[i], 0.0);
        assert_eq!(bb.hband()[i], bb.lband()[i]);
        assert_eq!(bb.wband()[i], 0.0);
    }
}

#[test]
fn numeric_policy_flat_prices_macd_is_zero() {
    let close = vec![25.0_f64; 60];
    let macd = MacdIndicator::new(&close, 26, 12, 9, false).unwrap();
    for i in 33..60 {
        assert_eq!(macd.macd()[i], 0.0);
        assert_eq!(macd.macd_signal()[i], 0.0);
        assert_eq!(macd.macd_diff()[i], 0.0);
    }
}

#[test]
fn numeric_policy_zero_price_roc() {
    let close = vec![0.0_f64, 2.0, 0.0, 0.0, 5.0];
    let roc = RocIndicator::new(&close, 2, false).unwrap().roc();
    // (0 - 0) / 0
    assert!(roc[2].is_nan());
    // (0 - 2) / 2
    assert_eq!(roc[3], -100.0);
    // (5 - 0) / 0
    assert_eq!(roc[4], f64::INFINITY);
}

#[test]
fn numeric_policy_zero_mavg_wband_is_non_finite() {
    let close = vec![-1.0_f64, 1.0, -1.0, 1.0];
    let wband = BollingerBands::new(&close, 2, 2.0, false).unwrap().wband();
    assert!(wband[1].is_infinite());
}

// ==================== Fill policy ====================

#[test]
fn numeric_policy_roc_fill_has_no_override() {
    // The default fill neutral backstops the leading run
    let close = vec![10.0_f64, 11.0, 12.0, 13.0];
    let roc = RocIndicator::new(&close, 2, true).unwrap().roc();
    let expected = FillPolicy::FILL.apply_default(vec![f64::NAN, f64::NAN, 20.0, 200.0 / 11.0]);
    for i in 0..4 {
        assert!(approx_eq(roc[i], expected[i], EPSILON));
    }
    assert_eq!(roc[0], 0.0);
}

#[test]
fn numeric_policy_neutral_values_per_output() {
    let close = vec![f64::NAN; 3];
    let bb = BollingerBands::new(&close, 2, 2.0, true).unwrap();
    assert_eq!(bb.mavg()[0], -1.0);
    assert_eq!(bb.hband()[0], -1.0);
    assert_eq!(bb.lband()[0], -1.0);
    assert_eq!(bb.wband()[0], 0.0);
    assert_eq!(bb.pband()[0], 0.0);
    assert_eq!(bb.hband_indicator()[0], 0.0);

    let macd = MacdIndicator::new(&close, 26, 12, 9, true).unwrap();
    assert_eq!(macd.macd()[0], 0.0);
    assert_eq!(macd.macd_signal()[0], 0.0);

    let tsi = TsiIndicator::new(&close, 25, 13, true).unwrap().tsi();
    assert_eq!(tsi[0], 0.0);
}

#[test]
fn numeric_policy_rsi_fill_neutral_is_50() {
    // A NaN close in the middle makes two NaN differences; they count as zero
    // moves so the RSI stays defined, but a leading NaN RSI would fill to 50.
    let filled = FillPolicy::FILL.apply(vec![f64::NAN, 40.0], 50.0);
    assert_eq!(filled, vec![50.0, 40.0]);

    let close = vec![10.0_f64, 9.0, f64::NAN, 8.0, 9.0];
    let rsi = RsiIndicator::new(&close, 3, true).unwrap().rsi();
    assert!(rsi.is_complete());
}

#[test]
fn numeric_policy_infinite_output_forward_filled() {
    let close = vec![5.0_f64, 0.0, 3.0, 6.0];
    let roc = RocIndicator::new(&close, 1, true).unwrap().roc();
    // (3 - 0) / 0 = inf is replaced by the previous value
    assert_eq!(roc[1], -100.0);
    assert_eq!(roc[2], -100.0);
    assert_eq!(roc[3], 100.0);
}

// ==================== Missing input ====================

#[test]
fn numeric_policy_sma_skips_missing_observations() {
    let data = vec![1.0_f64, 2.0, f64::NAN, 4.0, 5.0, 6.0];
    let strict = sma(&data, 3, false).unwrap();
    // Windows containing the gap hold only two observations
    assert!(strict[2].is_nan());
    assert!(strict[3].is_nan());
    assert!(strict[4].is_nan());
    assert!(approx_eq(strict[5], 5.0, EPSILON));

    let relaxed = sma(&data, 3, true).unwrap();
    assert!(approx_eq(relaxed[2], 1.5, EPSILON));
    assert!(approx_eq(relaxed[3], 3.0, EPSILON));
}

#[test]
fn numeric_policy_ema_carries_through_gap() {
    let data = vec![2.0_f64, f64::NAN, 8.0];
    let out = ema(&data, 3, true).unwrap();
    assert_eq!(out[1], 2.0);
    assert!(approx_eq(out[2], 6.0, EPSILON));
}

#[test]
fn numeric_policy_leading_missing_input() {
    let mut close = vec![f64::NAN; 5];
    close.extend((0..30_i32).map(|i| 100.0 + f64::from(i)));
    let rsi = RsiIndicator::new(&close, 14, false).unwrap().rsi();
    // Missing differences are zero moves, so the warm-up is unchanged
    assert_eq!(common::count_nan_prefix(rsi.values()), 13);

    let roc = RocIndicator::new(&close, 12, false).unwrap().roc();
    assert_eq!(common::count_nan_prefix(roc.values()), 17);
}
