//! Rate of Change (ROC) indicator.
//!
//! ROC is the percentage change between the current close and the close
//! `window` positions earlier.
//!
//! # Formula
//!
//! ```text
//! ROC[i] = (close[i] - close[i - window]) / close[i - window] × 100
//! ```
//!
//! The first `window` positions have no reference price and are NaN. A zero
//! reference price is not special-cased: the result is ±inf, or NaN when the
//! current close is also zero.
//!
//! # Fill
//!
//! Unlike the other indicators ROC declares no neutral value of its own; its
//! output goes through [`FillPolicy::apply_default`].
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::roc::Roc;
//!
//! let close = vec![100.0_f64, 102.0, 105.0, 110.0];
//! let roc = Roc::new().window(2).compute(&close).unwrap().roc();
//!
//! assert!(roc[1].is_nan());
//! assert!((roc[2] - 5.0).abs() < 1e-10);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::fill::FillPolicy;
use crate::series::{shift, Series};
use crate::traits::{validate_window, SeriesElement};

/// Returns the number of leading NaN positions of the ROC when not filling.
#[inline]
#[must_use]
pub const fn roc_lookback(window: usize) -> usize {
    window
}

/// ROC configuration with fluent builder API.
///
/// Defaults: `window = 12`, `fillna = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Roc {
    window: usize,
    fillna: bool,
}

impl Default for Roc {
    fn default() -> Self {
        Self {
            window: 12,
            fillna: false,
        }
    }
}

impl Roc {
    /// Creates a configuration with the standard window (12).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comparison distance.
    ///
    /// Default: 12
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

    /// Returns the comparison distance.
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
        roc_lookback(self.window)
    }

    /// Computes the ROC over `close`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the window is zero.
    pub fn compute<T: SeriesElement>(&self, close: &[T]) -> Result<RocIndicator<T>> {
        validate_window(self.window)?;

        let reference = shift(close, self.window);
        let roc = close
            .iter()
            .zip(&reference)
            .map(|(&price, &base)| (price - base) / base * T::hundred())
            .collect();

        debug!(
            indicator = "roc",
            window = self.window,
            fillna = self.fillna,
            len = close.len(),
            "computed indicator"
        );

        Ok(RocIndicator {
            fill: FillPolicy::new(self.fillna),
            roc,
        })
    }
}

/// Computed ROC over one close series.
#[derive(Debug, Clone)]
pub struct RocIndicator<T> {
    fill: FillPolicy,
    roc: Vec<T>,
}

impl<T: SeriesElement> RocIndicator<T> {
    /// Computes the ROC with explicit parameters.
    ///
    /// # Errors
    ///
    /// See [`Roc::compute`].
    pub fn new(close: &[T], window: usize, fillna: bool) -> Result<Self> {
        Roc::new().window(window).fillna(fillna).compute(close)
    }

    /// The ROC series in percent.
    #[must_use]
    pub fn roc(&self) -> Series<T> {
        Series::new("roc", self.fill.apply_default(self.roc.clone()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_roc_defaults() {
        let config = Roc::default();
        assert_eq!(config.get_window(), 12);
        assert_eq!(config.lookback(), 12);
    }

    #[test]
    fn test_roc_formula() {
        let close: Vec<f64> = (0..30).map(|i| 50.0 + (i as f64 * 0.4).cos() * 3.0).collect();
        let roc = RocIndicator::new(&close, 12, false).unwrap().roc();
        for i in 0..12 {
            assert!(roc[i].is_nan());
        }
        for i in 12..30 {
            let expected = (close[i] - close[i - 12]) / close[i - 12] * 100.0;
            assert!((roc[i] - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn test_roc_zero_reference_price() {
        let close = [0.0_f64, 0.0, 5.0, 0.0];
        let roc = RocIndicator::new(&close, 2, false).unwrap().roc();
        assert_eq!(roc[2], f64::INFINITY);
        assert!(roc[3].is_nan());
    }

    #[test]
    fn test_roc_fill_uses_default() {
        let close = [100.0_f64, 110.0, 121.0, 0.0, 5.0];
        let roc = RocIndicator::new(&close, 1, true).unwrap().roc();
        assert_eq!(roc[0], 0.0);
        assert!((roc[1] - 10.0).abs() < EPSILON);
        assert!((roc[2] - 10.0).abs() < EPSILON);
        assert_eq!(roc[3], -100.0);
        // +inf is forward-filled from the previous value
        assert_eq!(roc[4], -100.0);
    }

    #[test]
    fn test_roc_window_longer_than_input() {
        let roc = RocIndicator::new(&[1.0_f64, 2.0], 5, false).unwrap().roc();
        assert_eq!(roc.len(), 2);
        assert_eq!(roc.count_missing(), 2);
    }

    #[test]
    fn test_roc_zero_window() {
        assert!(matches!(
            RocIndicator::new(&[1.0_f64], 0, false),
            Err(Error::InvalidPeriod { .. })
        ));
    }
}
