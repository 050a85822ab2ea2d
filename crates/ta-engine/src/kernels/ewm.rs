//! Exponentially weighted mean kernel.
//!
//! Implements the non-adjusted exponential recurrence
//!
//! ```text
//! y[0] = x[first valid]
//! y[i] = (1 - alpha) * y[i-1] + alpha * x[i]
//! ```
//!
//! with two refinements that matter for real price data:
//!
//! - **Gaps**: a NaN input is not an observation. The running value is carried
//!   forward and the decay keeps accumulating, so the next observation after a
//!   gap of `k` positions is combined as
//!   `(w * y + alpha * x) / (w + alpha)` with `w = (1 - alpha)^(k + 1)`.
//! - **Exactness**: when an observation equals the running value the value is
//!   kept untouched, so a constant series yields that constant bit-exactly.
//!
//! Output position `i` is NaN until at least `min_periods` observations
//! (minimum 1) have been seen.
//!
//! # Example
//!
//! ```
//! use ta_engine::kernels::ewm::ewm_mean;
//!
//! let data = vec![1.0_f64, 2.0, 3.0];
//! let out = ewm_mean(&data, 0.5, 1);
//! assert_eq!(out, vec![1.0, 1.5, 2.25]);
//! ```

use crate::traits::SeriesElement;

/// Computes the exponentially weighted mean of `data` with smoothing factor `alpha`.
///
/// `alpha` must lie in `(0, 1]`; callers derive it from a validated window.
#[must_use]
pub fn ewm_mean<T: SeriesElement>(data: &[T], alpha: T, min_periods: usize) -> Vec<T> {
    let min_periods = min_periods.max(1);
    let mut output = vec![T::nan(); data.len()];

    let Some(&first) = data.first() else {
        return output;
    };

    let decay = T::one() - alpha;
    let mut weighted = first;
    let mut old_weight = T::one();
    let mut nobs = usize::from(!first.is_nan());

    if nobs >= min_periods {
        output[0] = weighted;
    }

    for (i, &value) in data.iter().enumerate().skip(1) {
        let is_observation = !value.is_nan();
        nobs += usize::from(is_observation);

        if !weighted.is_nan() {
            old_weight = old_weight * decay;
            if is_observation {
                if weighted != value {
                    weighted = (old_weight * weighted + alpha * value) / (old_weight + alpha);
                }
                old_weight = T::one();
            }
        } else if is_observation {
            weighted = value;
        }

        if nobs >= min_periods {
            output[i] = weighted;
        }
    }

    output
}

/// Smoothing factor for a span-parameterised EMA: `2 / (span + 1)`.
#[inline]
pub fn span_alpha<T: SeriesElement>(span: usize) -> crate::Result<T> {
    Ok(T::two() / (T::from_usize(span)? + T::one()))
}

/// Smoothing factor for Wilder's EMA: `1 / window`.
#[inline]
pub fn wilder_alpha<T: SeriesElement>(window: usize) -> crate::Result<T> {
    Ok(T::one() / T::from_usize(window)?)
}
