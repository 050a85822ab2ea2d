//! Batch processing over many independent close series.
//!
//! [`BatchProcessor`] runs any per-series computation (a panel, a single
//! indicator) over many series, e.g. one per symbol. With the `parallel`
//! feature enabled, batches at or above a size threshold run on the Rayon
//! thread pool; smaller batches and builds without the feature run
//! sequentially. Results are always returned in input order.
//!
//! # Example
//!
//! ```
//! use ta_engine::batch::BatchProcessor;
//! use ta_engine::panel::Panel;
//!
//! let symbols: Vec<Vec<f64>> = (0..3)
//!     .map(|k| (0..40).map(|i| 50.0 + f64::from(i + k)).collect())
//!     .collect();
//!
//! let outputs = BatchProcessor::new()
//!     .process_panel(&Panel::new().fillna(true), &symbols)
//!     .unwrap();
//! assert_eq!(outputs.len(), 3);
//! ```

use tracing::debug_span;

use crate::error::Result;
use crate::panel::{Panel, PanelOutput};
use crate::traits::SeriesElement;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Batch processor for computing over many independent series.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Minimum number of series required to use parallel processing.
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a batch processor with the default threshold (64 series).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: 64,
        }
    }

    /// Sets the minimum number of series required to use parallel processing.
    ///
    /// Smaller batches run sequentially to avoid thread-pool overhead.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns the parallel threshold.
    #[must_use]
    pub const fn get_min_parallel_threshold(&self) -> usize {
        self.min_parallel_threshold
    }

    /// Applies `compute` to every series and collects the results in input
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if any computation fails.
    ///
    /// # Example
    ///
    /// ```
    /// use ta_engine::batch::BatchProcessor;
    /// use ta_engine::indicators::Rsi;
    ///
    /// let symbols = vec![
    ///     vec![1.0_f64, 2.0, 3.0, 2.0, 3.0],
    ///     vec![5.0_f64, 4.0, 3.0, 4.0, 3.0],
    /// ];
    /// let rsi = BatchProcessor::new()
    ///     .process(&symbols, |close| Ok(Rsi::new().window(2).compute(close)?.rsi()))
    ///     .unwrap();
    /// assert_eq!(rsi.len(), 2);
    /// ```
    #[cfg(feature = "parallel")]
    pub fn process<T, F, R>(&self, series: &[Vec<T>], compute: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        let span = debug_span!("batch", series = series.len(), parallel = tracing::field::Empty);
        let _guard = span.enter();

        if series.len() < self.min_parallel_threshold {
            span.record("parallel", false);
            series.iter().map(|s| compute(s)).collect()
        } else {
            span.record("parallel", true);
            series.par_iter().map(|s| compute(s)).collect()
        }
    }

    /// Sequential version when the `parallel` feature is disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if any computation fails.
    #[cfg(not(feature = "parallel"))]
    pub fn process<T, F, R>(&self, series: &[Vec<T>], compute: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R>,
    {
        let span = debug_span!("batch", series = series.len(), parallel = false);
        let _guard = span.enter();

        series.iter().map(|s| compute(s)).collect()
    }

    /// Computes `panel` over every series.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error raised by an indicator.
    pub fn process_panel<T: SeriesElement>(
        &self,
        panel: &Panel,
        series: &[Vec<T>],
    ) -> Result<Vec<PanelOutput<T>>> {
        self.process(series, |close| panel.compute(close))
    }
}
