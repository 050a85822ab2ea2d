//! Dashboard indicator panel.
//!
//! A [`Panel`] bundles one configuration per indicator and computes the
//! series a commodity dashboard shows next to the close price: the Bollinger
//! high and low bands, the MACD line, RSI, TSI and ROC.
//!
//! To compute a panel over many symbols, see
//! [`BatchProcessor::process_panel`](crate::batch::BatchProcessor::process_panel).
//!
//! # Example
//!
//! ```
//! use ta_engine::panel::Panel;
//!
//! let close: Vec<f64> = (0..60).map(|i| 80.0 + (i as f64 * 0.25).sin() * 4.0).collect();
//! let output = Panel::new().fillna(true).compute(&close).unwrap();
//!
//! let names: Vec<&str> = output.series().iter().map(|s| s.name()).collect();
//! assert_eq!(names, ["hband", "lband", "MACD_12_26", "rsi", "tsi", "roc"]);
//! assert!(output.series().iter().all(|s| s.is_complete()));
//! ```

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::error::Result;
use crate::indicators::{Bollinger, Macd, Roc, Rsi, Tsi};
use crate::series::Series;
use crate::table::{Column, Table};
use crate::traits::SeriesElement;

/// One configuration per dashboard indicator.
///
/// Every field defaults to the indicator's standard parameters, so a partial
/// JSON document such as `{"rsi": {"window": 7}}` deserializes into a full
/// panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Panel {
    /// Bollinger Bands parameters.
    pub bollinger: Bollinger,
    /// MACD parameters.
    pub macd: Macd,
    /// RSI parameters.
    pub rsi: Rsi,
    /// TSI parameters.
    pub tsi: Tsi,
    /// ROC parameters.
    pub roc: Roc,
}

impl Panel {
    /// Creates a panel with every indicator at its standard parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fill flag of every indicator.
    #[must_use]
    pub const fn fillna(mut self, fillna: bool) -> Self {
        self.bollinger = self.bollinger.fillna(fillna);
        self.macd = self.macd.fillna(fillna);
        self.rsi = self.rsi.fillna(fillna);
        self.tsi = self.tsi.fillna(fillna);
        self.roc = self.roc.fillna(fillna);
        self
    }

    /// Replaces the Bollinger Bands configuration.
    #[must_use]
    pub const fn bollinger(mut self, config: Bollinger) -> Self {
        self.bollinger = config;
        self
    }

    /// Replaces the MACD configuration.
    #[must_use]
    pub const fn macd(mut self, config: Macd) -> Self {
        self.macd = config;
        self
    }

    /// Replaces the RSI configuration.
    #[must_use]
    pub const fn rsi(mut self, config: Rsi) -> Self {
        self.rsi = config;
        self
    }

    /// Replaces the TSI configuration.
    #[must_use]
    pub const fn tsi(mut self, config: Tsi) -> Self {
        self.tsi = config;
        self
    }

    /// Replaces the ROC configuration.
    #[must_use]
    pub const fn roc(mut self, config: Roc) -> Self {
        self.roc = config;
        self
    }

    /// Computes every panel series over `close`.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error raised by an indicator.
    pub fn compute<T: SeriesElement>(&self, close: &[T]) -> Result<PanelOutput<T>> {
        let span = debug_span!("panel", len = close.len());
        let _guard = span.enter();

        let bands = self.bollinger.compute(close)?;
        let macd = self.macd.compute(close)?;
        let rsi = self.rsi.compute(close)?;
        let tsi = self.tsi.compute(close)?;
        let roc = self.roc.compute(close)?;

        Ok(PanelOutput {
            hband: bands.hband(),
            lband: bands.lband(),
            macd: macd.macd(),
            rsi: rsi.rsi(),
            tsi: tsi.tsi(),
            roc: roc.roc(),
        })
    }
}

/// The named series produced by [`Panel::compute`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanelOutput<T> {
    /// Bollinger high band.
    pub hband: Series<T>,
    /// Bollinger low band.
    pub lband: Series<T>,
    /// MACD line.
    pub macd: Series<T>,
    /// Relative Strength Index.
    pub rsi: Series<T>,
    /// True Strength Index.
    pub tsi: Series<T>,
    /// Rate of Change.
    pub roc: Series<T>,
}

impl<T: SeriesElement> PanelOutput<T> {
    /// Returns the series in display order.
    #[must_use]
    pub fn series(&self) -> [&Series<T>; 6] {
        [
            &self.hband,
            &self.lband,
            &self.macd,
            &self.rsi,
            &self.tsi,
            &self.roc,
        ]
    }

    /// Assembles a table with a leading `close` column followed by every
    /// panel series under its own name.
    ///
    /// # Errors
    ///
    /// Returns `Error::ColumnLength` if `close` is not the series the panel
    /// was computed from (different length).
    pub fn to_table(&self, close: &[T]) -> Result<Table> {
        let mut table = Table::new();
        table.insert("close", Column::Numeric(widen(close)))?;
        for series in self.series() {
            table.insert(series.name(), Column::Numeric(widen(series.values())))?;
        }
        Ok(table)
    }
}

fn widen<T: SeriesElement>(values: &[T]) -> Vec<f64> {
    values
        .iter()
        .map(|v| v.to_f64().unwrap_or(f64::NAN))
        .collect()
}
