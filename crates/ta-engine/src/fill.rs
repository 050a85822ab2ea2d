//! Missing-value fill policy applied to indicator outputs.
//!
//! Every indicator carries a [`FillPolicy`] by value. When the policy is
//! enabled, each output accessor post-processes its series:
//!
//! 1. ±inf is treated as missing
//! 2. missing positions are forward-filled from the most recent valid value
//! 3. the remaining leading run (no valid predecessor) takes the accessor's
//!    neutral value
//!
//! The neutral value is chosen per output, never globally: RSI fills with 50,
//! Bollinger bands with -1, band width and oscillators with 0.
//!
//! # Example
//!
//! ```
//! use ta_engine::fill::FillPolicy;
//!
//! let raw = vec![f64::NAN, f64::NAN, 3.0, f64::INFINITY, 5.0];
//!
//! assert_eq!(FillPolicy::new(false).apply(raw.clone(), 50.0)[2], 3.0);
//! assert_eq!(
//!     FillPolicy::new(true).apply(raw, 50.0),
//!     vec![50.0, 50.0, 3.0, 3.0, 5.0]
//! );
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::traits::SeriesElement;

/// Whether indicator outputs have their missing values filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FillPolicy {
    fillna: bool,
}

impl FillPolicy {
    /// Policy that leaves outputs untouched.
    pub const KEEP: Self = Self { fillna: false };

    /// Policy that fills missing outputs.
    pub const FILL: Self = Self { fillna: true };

    /// Creates a policy from a `fillna` flag.
    #[must_use]
    pub const fn new(fillna: bool) -> Self {
        Self { fillna }
    }

    /// Returns the `fillna` flag.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.fillna
    }

    /// Applies the policy with an explicit neutral value.
    ///
    /// Returns `values` unchanged when the policy is disabled.
    #[must_use]
    pub fn apply<T: SeriesElement>(self, mut values: Vec<T>, neutral: T) -> Vec<T> {
        if self.fillna {
            let filled = fill_missing(&mut values, neutral);
            if filled > 0 {
                trace!(filled, len = values.len(), "filled missing indicator values");
            }
        }
        values
    }

    /// Applies the policy with the default neutral value (zero).
    ///
    /// Used by outputs that do not declare a neutral value of their own.
    #[must_use]
    pub fn apply_default<T: SeriesElement>(self, values: Vec<T>) -> Vec<T> {
        self.apply(values, T::zero())
    }
}

impl From<bool> for FillPolicy {
    fn from(fillna: bool) -> Self {
        Self::new(fillna)
    }
}

/// Forward-fills non-finite values in place, backstopping the leading run
/// with `neutral`. Returns the number of positions rewritten.
pub fn fill_missing<T: SeriesElement>(values: &mut [T], neutral: T) -> usize {
    let mut last_valid: Option<T> = None;
    let mut filled = 0;

    for value in values.iter_mut() {
        if value.is_finite() {
            last_valid = Some(*value);
        } else {
            *value = last_valid.unwrap_or(neutral);
            filled += 1;
        }
    }

    filled
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    #[test]
    fn test_disabled_policy_is_identity() {
        let raw = vec![f64::NAN, f64::INFINITY, 1.0];
        let out = FillPolicy::KEEP.apply(raw.clone(), 0.0);
        assert!(out[0].is_nan());
        assert!(out[1].is_infinite());
        assert_eq!(out[2], 1.0);
    }

    #[test]
    fn test_forward_fill_then_neutral() {
        let raw = vec![f64::NAN, 2.0, f64::NAN, f64::NAN, 7.0, f64::NAN];
        let out = FillPolicy::FILL.apply(raw, -1.0);
        assert_eq!(out, vec![-1.0, 2.0, 2.0, 2.0, 7.0, 7.0]);
    }

    #[test]
    fn test_infinities_become_missing() {
        let raw = vec![f64::NEG_INFINITY, 4.0, f64::INFINITY];
        let out = FillPolicy::FILL.apply(raw, 0.0);
        assert_eq!(out, vec![0.0, 4.0, 4.0]);
    }

    #[test]
    fn test_all_missing_takes_neutral() {
        let out = FillPolicy::FILL.apply(vec![f64::NAN; 4], 50.0);
        assert_eq!(out, vec![50.0; 4]);
    }

    #[test]
    fn test_apply_default_uses_zero() {
        let out = FillPolicy::FILL.apply_default(vec![f32::NAN, 3.0]);
        assert_eq!(out, vec![0.0, 3.0]);
    }

    #[test]
    fn test_fill_missing_counts() {
        let mut values = vec![f64::NAN, 1.0, f64::NAN];
        assert_eq!(fill_missing(&mut values, 9.0), 2);
        assert_eq!(values, vec![9.0, 1.0, 1.0]);
    }

    #[test]
    fn test_policy_from_bool() {
        assert!(FillPolicy::from(true).is_enabled());
        assert!(!FillPolicy::default().is_enabled());
    }
}
