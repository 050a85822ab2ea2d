//! Core traits for ta-engine numeric operations.
//!
//! The primary trait is [`SeriesElement`], which abstracts over `f32` and
//! `f64` so every indicator can be computed in either precision. The module
//! also holds the parameter validation helpers shared by the indicators.
//!
//! # Example
//!
//! ```
//! use ta_engine::traits::{validate_window, SeriesElement};
//!
//! fn mean_of_first<T: SeriesElement>(data: &[T], window: usize) -> ta_engine::Result<T> {
//!     validate_window(window)?;
//!     let n = T::from_usize(window)?;
//!     let sum = data.iter().take(window).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / n)
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0];
//! assert!((mean_of_first(&data, 3).unwrap() - 2.0).abs() < 1e-12);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// Extends `num_traits::Float` with the conversions and constants the
/// indicators need. `Send + Sync` is required so indicator instances can be
/// shared across threads.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    ///
    /// Used for the span-based EMA factor: `alpha = 2 / (span + 1)`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the constant 100 as this type.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        // Safe unwrap: 100 is always representable in Float types
        <Self as NumCast>::from(100).unwrap()
    }

    /// Returns the constant 50 as this type (the RSI midpoint).
    #[inline]
    #[must_use]
    fn fifty() -> Self {
        // Safe unwrap: 50 is always representable in Float types
        <Self as NumCast>::from(50).unwrap()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a window is usable for a rolling or exponential computation.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the window is zero.
#[inline]
pub const fn validate_window(window: usize) -> Result<()> {
    if window == 0 {
        Err(Error::InvalidPeriod {
            period: window,
            reason: "window must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates that two position-aligned series have the same length.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the lengths differ.
#[inline]
pub const fn validate_same_len(expected: usize, actual: usize, context: &'static str) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            expected,
            actual,
            context,
        })
    }
}

/// Converts an `f64` multiplier into `T`, rejecting non-finite values.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` for NaN or infinite input and
/// `Error::NumericConversion` if the value does not fit in `T`.
pub fn finite_param<T: SeriesElement>(argument: &'static str, value: f64) -> Result<T> {
    if !value.is_finite() {
        return Err(Error::InvalidArgument {
            argument,
            value: value.to_string(),
            expected: "a finite number",
        });
    }
    T::from_f64(value)
}
