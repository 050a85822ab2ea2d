//! Rolling window statistics with a minimum-observations rule.
//!
//! A window covers the trailing `window` positions. NaN inputs are not
//! observations: they occupy a slot in the window but do not count toward
//! `min_periods`. A position produces a value only when its window holds at
//! least `max(min_periods, 1)` observations, so `min_periods = 0` turns the
//! warm-up into an expanding window that starts at the first observation.
//!
//! # Algorithm
//!
//! Both statistics are O(n) add/remove updates:
//!
//! - **Mean**: Kahan-compensated running sum.
//! - **Variance**: Welford's online update, extended with a removal step:
//!
//! ```text
//! add x:    n += 1; d = x - mean; mean += d / n; m2 += d * (x - mean)
//! remove x: n -= 1; d = x - mean; mean -= d / n; m2 -= d * (x - mean)
//! ```
//!
//! Population variance is `m2 / n`, clamped at zero. When every observation
//! in the window is the same value the mean is that value exactly and the
//! variance is exactly zero, regardless of accumulated rounding.
//!
//! ±inf counts as an observation but is kept out of the running sums; every
//! window holding one yields NaN, and the windows after it are unaffected.
//!
//! # Example
//!
//! ```
//! use ta_engine::kernels::rolling::{rolling_mean, rolling_std};
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0];
//! let mean = rolling_mean(&data, 2, 2);
//! assert!(mean[0].is_nan());
//! assert_eq!(mean[1], 1.5);
//!
//! let std = rolling_std(&data, 2, 2);
//! assert_eq!(std[3], 0.5);
//! ```

use crate::traits::SeriesElement;

/// Online accumulator for the observations currently inside a window.
#[derive(Debug, Clone, Copy)]
struct WindowStat<T> {
    nobs: usize,
    infinite: usize,
    count: T,
    sum: T,
    compensation: T,
    mean: T,
    m2: T,
    prev_value: T,
    same_value_run: usize,
}

impl<T: SeriesElement> WindowStat<T> {
    fn new() -> Self {
        Self {
            nobs: 0,
            infinite: 0,
            count: T::zero(),
            sum: T::zero(),
            compensation: T::zero(),
            mean: T::zero(),
            m2: T::zero(),
            prev_value: T::nan(),
            same_value_run: 0,
        }
    }

    fn kahan_add(&mut self, value: T) {
        let y = value - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    fn add(&mut self, value: T) {
        if value.is_nan() {
            return;
        }
        if value.is_infinite() {
            self.infinite += 1;
            return;
        }
        self.nobs += 1;
        self.count = self.count + T::one();
        self.kahan_add(value);

        let delta = value - self.mean;
        self.mean = self.mean + delta / self.count;
        self.m2 = self.m2 + delta * (value - self.mean);

        if value == self.prev_value {
            self.same_value_run += 1;
        } else {
            self.same_value_run = 1;
        }
        self.prev_value = value;
    }

    fn remove(&mut self, value: T) {
        if value.is_nan() {
            return;
        }
        if value.is_infinite() {
            self.infinite -= 1;
            return;
        }
        if self.nobs <= 1 {
            let prev_value = self.prev_value;
            let run = self.same_value_run;
            let infinite = self.infinite;
            *self = Self::new();
            self.prev_value = prev_value;
            self.same_value_run = run;
            self.infinite = infinite;
            return;
        }
        self.nobs -= 1;
        self.count = self.count - T::one();
        self.kahan_add(-value);

        let delta = value - self.mean;
        self.mean = self.mean - delta / self.count;
        self.m2 = self.m2 - delta * (value - self.mean);
    }

    fn is_uniform(&self) -> bool {
        self.same_value_run >= self.nobs
    }

    fn observations(&self) -> usize {
        self.nobs + self.infinite
    }

    fn mean(&self) -> T {
        if self.infinite > 0 {
            return T::nan();
        }
        if self.is_uniform() {
            return self.prev_value;
        }
        self.sum / self.count
    }

    fn population_variance(&self) -> T {
        if self.infinite > 0 {
            return T::nan();
        }
        if self.nobs == 1 || self.is_uniform() {
            return T::zero();
        }
        let variance = self.m2 / self.count;
        if variance < T::zero() {
            T::zero()
        } else {
            variance
        }
    }
}

fn rolling_apply<T, F>(data: &[T], window: usize, min_periods: usize, stat: F) -> Vec<T>
where
    T: SeriesElement,
    F: Fn(&WindowStat<T>) -> T,
{
    let min_periods = min_periods.max(1);
    let mut output = vec![T::nan(); data.len()];
    let mut acc = WindowStat::new();

    for (i, &value) in data.iter().enumerate() {
        acc.add(value);
        if i >= window {
            acc.remove(data[i - window]);
        }
        if acc.observations() >= min_periods {
            output[i] = stat(&acc);
        }
    }

    output
}

/// Rolling arithmetic mean over the trailing `window` positions.
///
/// `window` must be at least 1; callers validate it.
#[must_use]
pub fn rolling_mean<T: SeriesElement>(data: &[T], window: usize, min_periods: usize) -> Vec<T> {
    rolling_apply(data, window, min_periods, WindowStat::mean)
}

/// Rolling population standard deviation (divisor = observation count).
///
/// `window` must be at least 1; callers validate it.
#[must_use]
pub fn rolling_std<T: SeriesElement>(data: &[T], window: usize, min_periods: usize) -> Vec<T> {
    rolling_apply(data, window, min_periods, |acc| {
        acc.population_variance().sqrt()
    })
}
