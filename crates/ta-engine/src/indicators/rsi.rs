//! Relative Strength Index (RSI) indicator.
//!
//! RSI is a momentum oscillator that measures the speed and magnitude of
//! price changes on a 0-100 scale.
//!
//! # Algorithm
//!
//! 1. First difference of the close (missing on the first position)
//! 2. Up-moves: the difference where positive, else 0
//! 3. Down-moves: the negated difference where negative, else 0
//! 4. Wilder smoothing of both with `alpha = 1 / window`
//! 5. `RSI = 100 - 100 / (1 + up / down)`
//!
//! A missing difference counts as a zero move for both sides, so smoothing
//! starts on the first position.
//!
//! # Zero Average Loss
//!
//! Wherever the smoothed down-moves are exactly zero the output is 100
//! (maximal strength) instead of the 0/0 or x/0 quotient. Only zero is
//! special-cased: the RSI is NaN while the smoothed series are still warming up.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::rsi::Rsi;
//!
//! let close: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
//! let rsi = Rsi::new().window(14).compute(&close).unwrap().rsi();
//!
//! assert!(rsi[12].is_nan());
//! // Only gains: the average loss is zero
//! assert_eq!(rsi[13], 100.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::fill::FillPolicy;
use crate::math::wilder_ema;
use crate::series::{diff, Series};
use crate::traits::{validate_window, SeriesElement};

/// Returns the number of leading NaN positions of the RSI when not filling.
///
/// The first difference is treated as a zero move, so the warm-up is one
/// position shorter than the window.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::rsi::rsi_lookback;
///
/// assert_eq!(rsi_lookback(14), 13);
/// ```
#[inline]
#[must_use]
pub const fn rsi_lookback(window: usize) -> usize {
    window.saturating_sub(1)
}

/// RSI configuration with fluent builder API.
///
/// Defaults: `window = 14`, `fillna = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rsi {
    window: usize,
    fillna: bool,
}

impl Default for Rsi {
    fn default() -> Self {
        Self {
            window: 14,
            fillna: false,
        }
    }
}

impl Rsi {
    /// Creates a configuration with the standard window (14).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the smoothing window.
    ///
    /// Default: 14
    #[must_use]
    pub const fn window(mut self, window: usize) -> Self {
        self.window = window;
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

    /// Returns the smoothing window.
    #[must_use]
    pub const fn get_window(&self) -> usize {
        self.window
    }

    /// Returns the fill flag.
    #[must_use]
    pub const fn get_fillna(&self) -> bool {
        self.fillna
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        rsi_lookback(self.window)
    }

    /// Computes the RSI over `close`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the window is zero.
    pub fn compute<T: SeriesElement>(&self, close: &[T]) -> Result<RsiIndicator<T>> {
        validate_window(self.window)?;

        let delta = diff(close);
        let up: Vec<T> = delta
            .iter()
            .map(|&d| if d > T::zero() { d } else { T::zero() })
            .collect();
        let down: Vec<T> = delta
            .iter()
            .map(|&d| if d < T::zero() { -d } else { T::zero() })
            .collect();

        let avg_gain = wilder_ema(&up, self.window, self.fillna)?;
        let avg_loss = wilder_ema(&down, self.window, self.fillna)?;
        let rsi = avg_gain
            .iter()
            .zip(&avg_loss)
            .map(|(&gain, &loss)| rsi_value(gain, loss))
            .collect();

        debug!(
            indicator = "rsi",
            window = self.window,
            fillna = self.fillna,
            len = close.len(),
            "computed indicator"
        );

        Ok(RsiIndicator {
            fill: FillPolicy::new(self.fillna),
            avg_gain,
            avg_loss,
            rsi,
        })
    }
}

#[inline]
fn rsi_value<T: SeriesElement>(avg_gain: T, avg_loss: T) -> T {
    if avg_loss == T::zero() {
        return T::hundred();
    }
    let rs = avg_gain / avg_loss;
    T::hundred() - T::hundred() / (T::one() + rs)
}

/// Computed RSI over one close series.
#[derive(Debug, Clone)]
pub struct RsiIndicator<T> {
    fill: FillPolicy,
    avg_gain: Vec<T>,
    avg_loss: Vec<T>,
    rsi: Vec<T>,
}

impl<T: SeriesElement> RsiIndicator<T> {
    /// Computes the RSI with explicit parameters.
    ///
    /// # Errors
    ///
    /// See [`Rsi::compute`].
    pub fn new(close: &[T], window: usize, fillna: bool) -> Result<Self> {
        Rsi::new().window(window).fillna(fillna).compute(close)
    }

    /// The RSI series, neutral value 50.
    #[must_use]
    pub fn rsi(&self) -> Series<T> {
        Series::new("rsi", self.fill.apply(self.rsi.clone(), T::fifty()))
    }

    /// Smoothed up-moves, never filled.
    #[must_use]
    pub fn avg_gain(&self) -> &[T] {
        &self.avg_gain
    }

    /// Smoothed down-moves, never filled.
    #[must_use]
    pub fn avg_loss(&self) -> &[T] {
        &self.avg_loss
    }
}
