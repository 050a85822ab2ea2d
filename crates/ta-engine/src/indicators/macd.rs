//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! MACD is a trend-following momentum indicator built from three series:
//! - **MACD Line**: fast EMA - slow EMA
//! - **Signal Line**: EMA of the MACD line
//! - **Histogram** (`diff`): MACD line - signal line
//!
//! # Output names
//!
//! The output labels embed the fast and slow windows, e.g. `MACD_12_26`,
//! `MACD_sign_12_26` and `MACD_diff_12_26`. Downstream labelling relies on
//! this format.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::macd::Macd;
//!
//! let close: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0).collect();
//! let macd = Macd::new().compute(&close).unwrap();
//!
//! let line = macd.macd();
//! assert_eq!(line.name(), "MACD_12_26");
//! assert!(line[24].is_nan());
//! assert!(!line[25].is_nan());
//!
//! // Signal needs 9 MACD values
//! assert!(macd.macd_signal()[32].is_nan());
//! assert!(!macd.macd_signal()[33].is_nan());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::fill::FillPolicy;
use crate::math::ema;
use crate::series::Series;
use crate::traits::{validate_window, SeriesElement};

/// Returns the lookback of the MACD line.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::macd::macd_line_lookback;
///
/// assert_eq!(macd_line_lookback(12, 26), 25);
/// ```
#[inline]
#[must_use]
pub const fn macd_line_lookback(window_fast: usize, window_slow: usize) -> usize {
    let longest = if window_fast > window_slow {
        window_fast
    } else {
        window_slow
    };
    longest.saturating_sub(1)
}

/// Returns the lookback of the signal line and histogram.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::macd::macd_signal_lookback;
///
/// assert_eq!(macd_signal_lookback(12, 26, 9), 33);
/// ```
#[inline]
#[must_use]
pub const fn macd_signal_lookback(window_fast: usize, window_slow: usize, window_sign: usize) -> usize {
    macd_line_lookback(window_fast, window_slow).saturating_add(window_sign.saturating_sub(1))
}

/// MACD configuration with fluent builder API.
///
/// Defaults: `window_slow = 26`, `window_fast = 12`, `window_sign = 9`,
/// `fillna = false`.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::macd::Macd;
///
/// let config = Macd::new().window_fast(5).window_slow(35).window_sign(5);
/// assert_eq!(config.get_window_fast(), 5);
/// assert_eq!(config.signal_lookback(), 38);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Macd {
    window_slow: usize,
    window_fast: usize,
    window_sign: usize,
    fillna: bool,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            window_slow: 26,
            window_fast: 12,
            window_sign: 9,
            fillna: false,
        }
    }
}

impl Macd {
    /// Creates a configuration with the standard windows (12, 26, 9).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slow EMA window.
    ///
    /// Default: 26
    #[must_use]
    pub const fn window_slow(mut self, window: usize) -> Self {
        self.window_slow = window;
        self
    }

    /// Sets the fast EMA window.
    ///
    /// Default: 12
    #[must_use]
    pub const fn window_fast(mut self, window: usize) -> Self {
        self.window_fast = window;
        self
    }

    /// Sets the signal EMA window.
    ///
    /// Default: 9
    #[must_use]
    pub const fn window_sign(mut self, window: usize) -> Self {
        self.window_sign = window;
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

    /// Returns the slow EMA window.
    #[must_use]
    pub const fn get_window_slow(&self) -> usize {
        self.window_slow
    }

    /// Returns the fast EMA window.
    #[must_use]
    pub const fn get_window_fast(&self) -> usize {
        self.window_fast
    }

    /// Returns the signal EMA window.
    #[must_use]
    pub const fn get_window_sign(&self) -> usize {
        self.window_sign
    }

    /// Returns the fill flag.
    #[must_use]
    pub const fn get_fillna(&self) -> bool {
        self.fillna
    }

    /// Returns the lookback of the MACD line.
    #[must_use]
    pub const fn line_lookback(&self) -> usize {
        macd_line_lookback(self.window_fast, self.window_slow)
    }

    /// Returns the lookback of the signal line and histogram.
    #[must_use]
    pub const fn signal_lookback(&self) -> usize {
        macd_signal_lookback(self.window_fast, self.window_slow, self.window_sign)
    }

    /// Computes MACD over `close`.
    ///
    /// The fast window is not required to be shorter than the slow one; the
    /// line is always `ema(fast) - ema(slow)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if any window is zero.
    pub fn compute<T: SeriesElement>(&self, close: &[T]) -> Result<MacdIndicator<T>> {
        validate_window(self.window_fast)?;
        validate_window(self.window_slow)?;
        validate_window(self.window_sign)?;

        let ema_fast = ema(close, self.window_fast, self.fillna)?;
        let ema_slow = ema(close, self.window_slow, self.fillna)?;
        let macd: Vec<T> = ema_fast
            .iter()
            .zip(&ema_slow)
            .map(|(&fast, &slow)| fast - slow)
            .collect();
        let signal = ema(&macd, self.window_sign, self.fillna)?;
        let diff = macd
            .iter()
            .zip(&signal)
            .map(|(&line, &signal)| line - signal)
            .collect();

        debug!(
            indicator = "macd",
            window_fast = self.window_fast,
            window_slow = self.window_slow,
            window_sign = self.window_sign,
            fillna = self.fillna,
            len = close.len(),
            "computed indicator"
        );

        Ok(MacdIndicator {
            window_fast: self.window_fast,
            window_slow: self.window_slow,
            fill: FillPolicy::new(self.fillna),
            ema_fast,
            ema_slow,
            macd,
            signal,
            diff,
        })
    }
}

/// Computed MACD over one close series.
#[derive(Debug, Clone)]
pub struct MacdIndicator<T> {
    window_fast: usize,
    window_slow: usize,
    fill: FillPolicy,
    ema_fast: Vec<T>,
    ema_slow: Vec<T>,
    macd: Vec<T>,
    signal: Vec<T>,
    diff: Vec<T>,
}

impl<T: SeriesElement> MacdIndicator<T> {
    /// Computes MACD with explicit parameters.
    ///
    /// # Errors
    ///
    /// See [`Macd::compute`].
    pub fn new(
        close: &[T],
        window_slow: usize,
        window_fast: usize,
        window_sign: usize,
        fillna: bool,
    ) -> Result<Self> {
        Macd::new()
            .window_slow(window_slow)
            .window_fast(window_fast)
            .window_sign(window_sign)
            .fillna(fillna)
            .compute(close)
    }

    /// The MACD line, labelled `MACD_{fast}_{slow}`, neutral value 0.
    #[must_use]
    pub fn macd(&self) -> Series<T> {
        Series::new(
            format!("MACD_{}_{}", self.window_fast, self.window_slow),
            self.fill.apply(self.macd.clone(), T::zero()),
        )
    }

    /// The signal line, labelled `MACD_sign_{fast}_{slow}`, neutral value 0.
    #[must_use]
    pub fn macd_signal(&self) -> Series<T> {
        Series::new(
            format!("MACD_sign_{}_{}", self.window_fast, self.window_slow),
            self.fill.apply(self.signal.clone(), T::zero()),
        )
    }

    /// The histogram, labelled `MACD_diff_{fast}_{slow}`, neutral value 0.
    #[must_use]
    pub fn macd_diff(&self) -> Series<T> {
        Series::new(
            format!("MACD_diff_{}_{}", self.window_fast, self.window_slow),
            self.fill.apply(self.diff.clone(), T::zero()),
        )
    }

    /// The fast EMA, never filled.
    #[must_use]
    pub fn ema_fast(&self) -> &[T] {
        &self.ema_fast
    }

    /// The slow EMA, never filled.
    #[must_use]
    pub fn ema_slow(&self) -> &[T] {
        &self.ema_slow
    }
}
