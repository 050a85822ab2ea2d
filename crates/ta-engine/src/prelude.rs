//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use ta_engine::prelude::*;
//!
//! let close = vec![20.0_f64, 21.0, 22.0, 21.5, 22.5, 23.0, 22.0, 21.0];
//!
//! let bands = Bollinger::new().window(5).compute(&close).unwrap();
//! let roc = Roc::new().window(3).compute(&close).unwrap();
//! let smoothed = ema(&close, 3, false).unwrap();
//!
//! assert_eq!(bands.hband().len(), close.len());
//! assert_eq!(roc.roc().len(), close.len());
//! assert_eq!(smoothed.len(), close.len());
//! ```
//!
//! # Contents
//!
//! - [`Error`], [`Result`]: error handling
//! - [`SeriesElement`]: numeric element trait
//! - [`Series`], [`FillPolicy`]: outputs and their fill rule
//! - Indicator configs and results: [`Bollinger`], [`Rsi`], [`Macd`],
//!   [`Roc`], [`Tsi`] and their computed types
//! - Series math: `sma`, `ema`, `wilder_ema`, `rolling_std`, `true_range`,
//!   `elementwise_extreme`
//! - [`Panel`], [`BatchProcessor`], [`Table`], [`sanitize`]

// Error types
pub use crate::error::{Error, Result};

// Traits and core types
pub use crate::fill::FillPolicy;
pub use crate::series::Series;
pub use crate::traits::SeriesElement;

// Indicators
pub use crate::indicators::{
    Bollinger, BollingerBands, Macd, MacdIndicator, Roc, RocIndicator, Rsi, RsiIndicator, Tsi,
    TsiIndicator,
};

// Series math
pub use crate::math::{
    elementwise, elementwise_extreme, ema, rolling_std, sma, true_range, wilder_ema, Extreme,
};

// Panel, batch and tables
pub use crate::batch::BatchProcessor;
pub use crate::panel::{Panel, PanelOutput};
pub use crate::table::{sanitize, Column, Table};
