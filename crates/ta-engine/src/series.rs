//! Named output series.
//!
//! Every indicator accessor returns a [`Series`]: the computed values plus
//! the label a charting or export collaborator shows for them. The values
//! always have the same length as the input series the indicator was built
//! from.

use std::ops::Index;

use crate::traits::SeriesElement;

/// A named, position-indexed sequence of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T> {
    name: String,
    values: Vec<T>,
}

impl<T: SeriesElement> Series<T> {
    /// Creates a series from a name and its values.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Returns the label of this series.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the values as a slice.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Consumes the series and returns its values.
    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Returns the number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    /// Returns the last value, if any.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.values.last().copied()
    }

    /// Iterates over the values.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    /// Counts positions holding NaN or ±inf.
    #[must_use]
    pub fn count_missing(&self) -> usize {
        self.values.iter().filter(|v| !v.is_finite()).count()
    }

    /// Returns true if every position holds a finite value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

impl<T> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T> AsRef<[T]> for Series<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

/// First difference: `out[i] = data[i] - data[i - 1]`, NaN at position 0.
#[must_use]
pub fn diff<T: SeriesElement>(data: &[T]) -> Vec<T> {
    let mut out = vec![T::nan(); data.len()];
    for i in 1..data.len() {
        out[i] = data[i] - data[i - 1];
    }
    out
}

/// Lags a series by `periods` positions, filling the head with NaN.
#[must_use]
pub fn shift<T: SeriesElement>(data: &[T], periods: usize) -> Vec<T> {
    let mut out = vec![T::nan(); data.len()];
    if periods < data.len() {
        out[periods..].copy_from_slice(&data[..data.len() - periods]);
    }
    out
}
