//! Bollinger Bands indicator.
//!
//! Bollinger Bands are a volatility envelope around a moving average:
//! - **Middle Band** (`mavg`): rolling mean of the close
//! - **High Band** (`hband`): `mavg + window_dev × mstd`
//! - **Low Band** (`lband`): `mavg - window_dev × mstd`
//!
//! plus four derived outputs: band width, percent-band and the two binary
//! band-crossing indicators.
//!
//! # Mathematical Conventions
//!
//! - **Population Standard Deviation**: `mstd` divides by the number of
//!   observations in the window, not `n - 1`.
//! - **Flat prices**: a constant window has `mstd == 0`, so
//!   `hband == lband == mavg`. Percent-band is then `0 / 0` and is left as NaN
//!   for the fill policy to resolve.
//!
//! # Formula
//!
//! ```text
//! wband = (hband - lband) / mavg × 100
//! pband = (close - lband) / (hband - lband)
//! hband_indicator = 1 if close > hband else 0
//! lband_indicator = 1 if close < lband else 0
//! ```
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::bollinger::Bollinger;
//!
//! let close = vec![20.0_f64, 21.0, 22.0, 21.5, 22.5, 23.0, 22.0, 21.0, 20.5, 21.5];
//! let bb = Bollinger::new().window(5).compute(&close).unwrap();
//!
//! let hband = bb.hband();
//! let lband = bb.lband();
//! assert_eq!(hband.name(), "hband");
//! assert!(hband[3].is_nan());
//! assert!(hband[4] > lband[4]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::fill::FillPolicy;
use crate::math::{rolling_std, sma};
use crate::series::Series;
use crate::traits::{finite_param, validate_window, SeriesElement};

/// Returns the number of leading NaN positions of the bands when not filling.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::bollinger::bollinger_lookback;
///
/// assert_eq!(bollinger_lookback(20), 19);
/// ```
#[inline]
#[must_use]
pub const fn bollinger_lookback(window: usize) -> usize {
    window.saturating_sub(1)
}

/// Bollinger Bands configuration with fluent builder API.
///
/// Defaults: `window = 20`, `window_dev = 2.0`, `fillna = false`.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::bollinger::Bollinger;
///
/// let config = Bollinger::new().window(10).window_dev(2.5).fillna(true);
/// assert_eq!(config.get_window(), 10);
/// assert_eq!(config.get_window_dev(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bollinger {
    window: usize,
    window_dev: f64,
    fillna: bool,
}

impl Default for Bollinger {
    fn default() -> Self {
        Self {
            window: 20,
            window_dev: 2.0,
            fillna: false,
        }
    }
}

impl Bollinger {
    /// Creates a configuration with the standard parameters (20, 2.0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rolling window.
    ///
    /// Default: 20
    #[must_use]
    pub const fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Sets the standard-deviation multiplier (may be fractional).
    ///
    /// Default: 2.0
    #[must_use]
    pub const fn window_dev(mut self, window_dev: f64) -> Self {
        self.window_dev = window_dev;
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

    /// Returns the rolling window.
    #[must_use]
    pub const fn get_window(&self) -> usize {
        self.window
    }

    /// Returns the standard-deviation multiplier.
    #[must_use]
    pub const fn get_window_dev(&self) -> f64 {
        self.window_dev
    }

    /// Returns the fill flag.
    #[must_use]
    pub const fn get_fillna(&self) -> bool {
        self.fillna
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        bollinger_lookback(self.window)
    }

    /// Computes the bands over `close`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the window is zero and
    /// `Error::InvalidArgument` if `window_dev` is not finite.
    pub fn compute<T: SeriesElement>(&self, close: &[T]) -> Result<BollingerBands<T>> {
        validate_window(self.window)?;
        let window_dev: T = finite_param("window_dev", self.window_dev)?;

        let mavg = sma(close, self.window, self.fillna)?;
        let mstd = rolling_std(close, self.window, self.fillna)?;
        let hband: Vec<T> = mavg
            .iter()
            .zip(&mstd)
            .map(|(&m, &s)| m + window_dev * s)
            .collect();
        let lband: Vec<T> = mavg
            .iter()
            .zip(&mstd)
            .map(|(&m, &s)| m - window_dev * s)
            .collect();

        let wband = hband
            .iter()
            .zip(&lband)
            .zip(&mavg)
            .map(|((&h, &l), &m)| (h - l) / m * T::hundred())
            .collect();
        // Zero-spread windows give NaN or ±inf here, left for the fill policy
        let pband = close
            .iter()
            .zip(hband.iter().zip(&lband))
            .map(|(&c, (&h, &l))| (c - l) / (h - l))
            .collect();
        let hband_indicator = crossing(close, &hband, |c, band| c > band);
        let lband_indicator = crossing(close, &lband, |c, band| c < band);

        debug!(
            indicator = "bollinger",
            window = self.window,
            window_dev = self.window_dev,
            fillna = self.fillna,
            len = close.len(),
            "computed indicator"
        );

        Ok(BollingerBands {
            fill: FillPolicy::new(self.fillna),
            mavg,
            mstd,
            hband,
            lband,
            wband,
            pband,
            hband_indicator,
            lband_indicator,
        })
    }
}

/// Computed Bollinger Bands over one close series.
///
/// All state is computed on construction; accessors only read it.
#[derive(Debug, Clone)]
pub struct BollingerBands<T> {
    fill: FillPolicy,
    mavg: Vec<T>,
    mstd: Vec<T>,
    hband: Vec<T>,
    lband: Vec<T>,
    wband: Vec<T>,
    pband: Vec<T>,
    hband_indicator: Vec<T>,
    lband_indicator: Vec<T>,
}

impl<T: SeriesElement> BollingerBands<T> {
    /// Computes Bollinger Bands with explicit parameters.
    ///
    /// # Errors
    ///
    /// See [`Bollinger::compute`].
    pub fn new(close: &[T], window: usize, window_dev: f64, fillna: bool) -> Result<Self> {
        Bollinger::new()
            .window(window)
            .window_dev(window_dev)
            .fillna(fillna)
            .compute(close)
    }

    /// Middle band (rolling mean), neutral value -1.
    #[must_use]
    pub fn mavg(&self) -> Series<T> {
        Series::new("mavg", self.fill.apply(self.mavg.clone(), -T::one()))
    }

    /// High band, neutral value -1.
    #[must_use]
    pub fn hband(&self) -> Series<T> {
        Series::new("hband", self.fill.apply(self.hband.clone(), -T::one()))
    }

    /// Low band, neutral value -1.
    #[must_use]
    pub fn lband(&self) -> Series<T> {
        Series::new("lband", self.fill.apply(self.lband.clone(), -T::one()))
    }

    /// Band width as a percentage of the middle band, neutral value 0.
    #[must_use]
    pub fn wband(&self) -> Series<T> {
        Series::new("bbiwband", self.fill.apply(self.wband.clone(), T::zero()))
    }

    /// Position of the close within the bands, neutral value 0.
    ///
    /// Zero-spread windows are not special-cased: the IEEE result of the
    /// division (NaN or ±inf) is handed to the fill policy.
    #[must_use]
    pub fn pband(&self) -> Series<T> {
        Series::new("bbipband", self.fill.apply(self.pband.clone(), T::zero()))
    }

    /// 1.0 where the close is strictly above the high band, else 0.0.
    #[must_use]
    pub fn hband_indicator(&self) -> Series<T> {
        Series::new(
            "bbihband",
            self.fill.apply(self.hband_indicator.clone(), T::zero()),
        )
    }

    /// 1.0 where the close is strictly below the low band, else 0.0.
    #[must_use]
    pub fn lband_indicator(&self) -> Series<T> {
        Series::new(
            "bbilband",
            self.fill.apply(self.lband_indicator.clone(), T::zero()),
        )
    }

    /// Raw rolling population standard deviation, never filled.
    #[must_use]
    pub fn std_dev(&self) -> &[T] {
        &self.mstd
    }

    /// The fill policy this instance was built with.
    #[must_use]
    pub const fn fill_policy(&self) -> FillPolicy {
        self.fill
    }
}

fn crossing<T: SeriesElement>(close: &[T], band: &[T], crosses: impl Fn(T, T) -> bool) -> Vec<T> {
    close
        .iter()
        .zip(band)
        .map(|(&c, &b)| if crosses(c, b) { T::one() } else { T::zero() })
        .collect()
}
