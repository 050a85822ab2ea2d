//! True Strength Index (TSI) indicator.
//!
//! TSI is a momentum oscillator built from a double-smoothed price change
//! divided by the double-smoothed absolute price change.
//!
//! # Formula
//!
//! ```text
//! d   = close[i] - close[i - 1]
//! num = EMA(EMA(d, window_slow), window_fast)
//! den = EMA(EMA(|d|, window_slow), window_fast)
//! TSI = 100 × num / den
//! ```
//!
//! The result lies in `[-100, 100]`. A zero denominator (flat prices) is
//! not special-cased: the quotient is left as NaN, which the fill policy
//! replaces with 0 when enabled.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::tsi::Tsi;
//!
//! let close: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
//! let tsi = Tsi::new().compute(&close).unwrap().tsi();
//!
//! assert!(tsi[36].is_nan());
//! assert!((tsi[37] - 100.0).abs() < 1e-10);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::fill::FillPolicy;
use crate::math::ema;
use crate::series::{diff, Series};
use crate::traits::{validate_window, SeriesElement};

/// Returns the number of leading NaN positions of the TSI when not filling.
///
/// The first difference costs one position, the slow EMA needs
/// `window_slow` differences and the fast EMA `window_fast` slow values.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::tsi::tsi_lookback;
///
/// assert_eq!(tsi_lookback(25, 13), 37);
/// ```
#[inline]
#[must_use]
pub const fn tsi_lookback(window_slow: usize, window_fast: usize) -> usize {
    window_slow.saturating_add(window_fast).saturating_sub(1)
}

/// TSI configuration with fluent builder API.
///
/// Defaults: `window_slow = 25`, `window_fast = 13`, `fillna = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Tsi {
    window_slow: usize,
    window_fast: usize,
    fillna: bool,
}

impl Default for Tsi {
    fn default() -> Self {
        Self {
            window_slow: 25,
            window_fast: 13,
            fillna: false,
        }
    }
}

impl Tsi {
    /// Creates a configuration with the standard windows (25, 13).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first smoothing window.
    ///
    /// Default: 25
    #[must_use]
    pub const fn window_slow(mut self, window: usize) -> Self {
        self.window_slow = window;
        self
    }

    /// Sets the second smoothing window.
    ///
    /// Default: 13
    #[must_use]
    pub const fn window_fast(mut self, window: usize) -> Self {
        self.window_fast = window;
        self
    }

    /// Enables or disables filling of missing outputs.
    ///
    /// Default: false
    #[must_use]
    pub const fn fillna(mut self, fillna: bool) -> Self {
        self.fillna = fillna;
        self
    }

    /// Returns the first smoothing window.
    #[must_use]
    pub const fn get_window_slow(&self) -> usize {
        self.window_slow
    }

    /// Returns the second smoothing window.
    #[must_use]
    pub const fn get_window_fast(&self) -> usize {
        self.window_fast
    }

    /// Returns the fill flag.
    #[must_use]
    pub const fn get_fillna(&self) -> bool {
        self.fillna
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        tsi_lookback(self.window_slow, self.window_fast)
    }

    /// Computes the TSI over `close`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if either window is zero.
    pub fn compute<T: SeriesElement>(&self, close: &[T]) -> Result<TsiIndicator<T>> {
        validate_window(self.window_slow)?;
        validate_window(self.window_fast)?;

        let delta = diff(close);
        let abs_delta: Vec<T> = delta.iter().map(|d| d.abs()).collect();

        let numerator = self.double_smooth(&delta)?;
        let denominator = self.double_smooth(&abs_delta)?;
        let tsi = numerator
            .iter()
            .zip(&denominator)
            .map(|(&num, &den)| num / den * T::hundred())
            .collect();

        debug!(
            indicator = "tsi",
            window_slow = self.window_slow,
            window_fast = self.window_fast,
            fillna = self.fillna,
            len = close.len(),
            "computed indicator"
        );

        Ok(TsiIndicator {
            fill: FillPolicy::new(self.fillna),
            numerator,
            denominator,
            tsi,
        })
    }

    fn double_smooth<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<T>> {
        let first = ema(data, self.window_slow, self.fillna)?;
        ema(&first, self.window_fast, self.fillna)
    }
}

/// Computed TSI over one close series.
#[derive(Debug, Clone)]
pub struct TsiIndicator<T> {
    fill: FillPolicy,
    numerator: Vec<T>,
    denominator: Vec<T>,
    tsi: Vec<T>,
}

impl<T: SeriesElement> TsiIndicator<T> {
    /// Computes the TSI with explicit parameters.
    ///
    /// # Errors
    ///
    /// See [`Tsi::compute`].
    pub fn new(close: &[T], window_slow: usize, window_fast: usize, fillna: bool) -> Result<Self> {
        Tsi::new()
            .window_slow(window_slow)
            .window_fast(window_fast)
            .fillna(fillna)
            .compute(close)
    }

    /// The TSI series, neutral value 0.
    #[must_use]
    pub fn tsi(&self) -> Series<T> {
        Series::new("tsi", self.fill.apply(self.tsi.clone(), T::zero()))
    }

    /// Double-smoothed price change, never filled.
    #[must_use]
    pub fn numerator(&self) -> &[T] {
        &self.numerator
    }

    /// Double-smoothed absolute price change, never filled.
    #[must_use]
    pub fn denominator(&self) -> &[T] {
        &self.denominator
    }
}
