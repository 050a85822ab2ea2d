//! Primitive series math shared by the indicators.
//!
//! The moving averages take a `fillna` flag that selects the minimum-periods
//! rule: `false` requires a full window of observations before producing a
//! value, `true` produces a value from the first observation onward
//! (expanding window for [`sma`], unrestricted recurrence for [`ema`]).
//!
//! # Example
//!
//! ```
//! use ta_engine::math::{ema, sma};
//!
//! let prices = vec![10.0_f64, 11.0, 12.0, 13.0];
//!
//! let strict = sma(&prices, 3, false).unwrap();
//! assert!(strict[1].is_nan());
//! assert_eq!(strict[2], 11.0);
//!
//! let relaxed = sma(&prices, 3, true).unwrap();
//! assert_eq!(relaxed[1], 10.5);
//!
//! let smoothed = ema(&prices, 3, false).unwrap();
//! assert!(smoothed[1].is_nan());
//! assert!(!smoothed[2].is_nan());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::kernels::{ewm, rolling};
use crate::traits::{validate_same_len, validate_window, SeriesElement};

/// Minimum number of observations before a windowed value is defined.
#[inline]
#[must_use]
pub const fn min_periods(window: usize, fillna: bool) -> usize {
    if fillna {
        0
    } else {
        window
    }
}

/// Simple moving average over the trailing `window` observations.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `window` is zero.
pub fn sma<T: SeriesElement>(data: &[T], window: usize, fillna: bool) -> Result<Vec<T>> {
    validate_window(window)?;
    Ok(rolling::rolling_mean(data, window, min_periods(window, fillna)))
}

/// Exponential moving average with smoothing span `window`.
///
/// Uses `alpha = 2 / (window + 1)` and the non-adjusted recurrence seeded with
/// the first valid value; the recurrence never resets.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `window` is zero.
pub fn ema<T: SeriesElement>(data: &[T], window: usize, fillna: bool) -> Result<Vec<T>> {
    validate_window(window)?;
    let alpha = ewm::span_alpha(window)?;
    Ok(ewm::ewm_mean(data, alpha, min_periods(window, fillna)))
}

/// Wilder-style exponential smoothing with `alpha = 1 / window`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `window` is zero.
pub fn wilder_ema<T: SeriesElement>(data: &[T], window: usize, fillna: bool) -> Result<Vec<T>> {
    validate_window(window)?;
    let alpha = ewm::wilder_alpha(window)?;
    Ok(ewm::ewm_mean(data, alpha, min_periods(window, fillna)))
}

/// Rolling population standard deviation (divisor = window count).
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `window` is zero.
pub fn rolling_std<T: SeriesElement>(data: &[T], window: usize, fillna: bool) -> Result<Vec<T>> {
    validate_window(window)?;
    Ok(rolling::rolling_std(data, window, min_periods(window, fillna)))
}

/// True range: the largest of `high - low`, `|high - prev_close|` and
/// `|low - prev_close|` at each position.
///
/// NaN candidates are skipped, so a missing previous close (e.g. on the first
/// bar) falls back to `high - low`. The result is NaN only when all three
/// candidates are NaN.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the inputs differ in length.
///
/// # Example
///
/// ```
/// use ta_engine::math::true_range;
///
/// let high = [10.0_f64, 12.0];
/// let low = [8.0, 11.0];
/// let prev_close = [f64::NAN, 9.0];
/// let tr = true_range(&high, &low, &prev_close).unwrap();
/// assert_eq!(tr, vec![2.0, 3.0]);
/// ```
pub fn true_range<T: SeriesElement>(high: &[T], low: &[T], prev_close: &[T]) -> Result<Vec<T>> {
    validate_same_len(high.len(), low.len(), "true_range")?;
    validate_same_len(high.len(), prev_close.len(), "true_range")?;

    Ok(high
        .iter()
        .zip(low)
        .zip(prev_close)
        .map(|((&h, &l), &pc)| {
            let range = h - l;
            let up = (h - pc).abs();
            let down = (l - pc).abs();
            // Float::max returns the non-NaN operand when exactly one is NaN
            range.max(up).max(down)
        })
        .collect())
}

/// Selects which extreme [`elementwise`] keeps at each position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    /// Position-wise minimum.
    Min,
    /// Position-wise maximum.
    Max,
}

impl FromStr for Extreme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            other => Err(Error::InvalidArgument {
                argument: "mode",
                value: other.to_string(),
                expected: "\"min\" or \"max\"",
            }),
        }
    }
}

impl fmt::Display for Extreme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => f.write_str("min"),
            Self::Max => f.write_str("max"),
        }
    }
}

/// Position-wise minimum or maximum of two equal-length series.
///
/// NaN in either operand yields NaN at that position.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the series differ in length.
pub fn elementwise<T: SeriesElement>(a: &[T], b: &[T], mode: Extreme) -> Result<Vec<T>> {
    validate_same_len(a.len(), b.len(), "elementwise_extreme")?;

    Ok(a.iter()
        .zip(b)
        .map(|(&x, &y)| {
            if x.is_nan() || y.is_nan() {
                T::nan()
            } else {
                match mode {
                    Extreme::Min => x.min(y),
                    Extreme::Max => x.max(y),
                }
            }
        })
        .collect())
}

/// Position-wise minimum or maximum selected by name (`"min"` or `"max"`).
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `mode` is neither `"min"` nor `"max"`,
/// and `Error::LengthMismatch` if the series differ in length.
///
/// # Example
///
/// ```
/// use ta_engine::math::elementwise_extreme;
///
/// let a = [1.0_f64, 5.0, 3.0];
/// let b = [2.0_f64, 4.0, 3.0];
/// assert_eq!(elementwise_extreme(&a, &b, "max").unwrap(), vec![2.0, 5.0, 3.0]);
/// assert!(elementwise_extreme(&a, &b, "mean").is_err());
/// ```
pub fn elementwise_extreme<T: SeriesElement>(a: &[T], b: &[T], mode: &str) -> Result<Vec<T>> {
    let mode: Extreme = mode.parse()?;
    elementwise(a, b, mode)
}
