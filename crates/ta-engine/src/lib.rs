//! ta-engine: technical indicator engine for financial time series
//!
//! This crate turns a close-price series into the derived signal series a
//! market dashboard plots next to it: moving averages, oscillators and bands.
//! Every indicator is a one-shot, eagerly computed object: the constructor
//! runs the whole computation and the output accessors are pure reads.
//!
//! # Features
//!
//! - **Generics**: works with both `f32` and `f64` series
//! - **Fill policy**: each indicator can replace missing and non-finite
//!   outputs with a forward-filled, then neutral, value
//! - **Configuration**: serde-enabled builder configs with standard defaults
//! - **Batching**: optional Rayon parallelism over many series (`parallel`)
//!
//! # Quick Start
//!
//! ```
//! use ta_engine::prelude::*;
//!
//! let close = vec![10.0_f64, 11.0, 12.0, 11.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0];
//!
//! let rsi = Rsi::new().window(5).compute(&close).unwrap().rsi();
//! assert_eq!(rsi.name(), "rsi");
//! assert!(rsi[3].is_nan());
//! assert!(rsi[9] > 50.0);
//!
//! let filled = Rsi::new().window(5).fillna(true).compute(&close).unwrap().rsi();
//! assert!(filled.is_complete());
//! ```
//!
//! # Available Indicators
//!
//! - [`indicators::bollinger`]: Bollinger Bands (bands, width, percent-band, crossings)
//! - [`indicators::rsi`]: Relative Strength Index
//! - [`indicators::macd`]: Moving Average Convergence Divergence
//! - [`indicators::roc`]: Rate of Change
//! - [`indicators::tsi`]: True Strength Index
//!
//! Shared numeric helpers (`sma`, `ema`, `true_range`,
//! `elementwise_extreme`) live in [`math`], the row sanitizer in [`table`].
//!
//! # Error Handling
//!
//! Errors are reserved for unusable configuration. Short input is not an
//! error; positions without enough history are NaN:
//!
//! ```
//! use ta_engine::prelude::*;
//!
//! assert!(Rsi::new().window(0).compute(&[1.0_f64, 2.0]).is_err());
//!
//! let short = Rsi::new().compute(&[1.0_f64, 2.0]).unwrap().rsi();
//! assert_eq!(short.count_missing(), 2);
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (indicator construction at `debug`,
//! fill activity at `trace`) and never installs a subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod error;
pub mod fill;
pub mod indicators;
pub mod kernels;
pub mod math;
pub mod panel;
pub mod prelude;
pub mod series;
pub mod table;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use fill::FillPolicy;
pub use series::Series;
pub use traits::SeriesElement;
