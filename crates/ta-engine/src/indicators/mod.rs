//! Technical indicators.
//!
//! Each indicator has a serde-friendly configuration type with a fluent
//! builder (`Bollinger`, `Rsi`, `Macd`, `Roc`, `Tsi`) and a computed result
//! type that owns its internal series. All computation happens in
//! `compute`/`new`; the output accessors are pure reads that apply the
//! indicator's [`FillPolicy`](crate::fill::FillPolicy) and return a named
//! [`Series`](crate::series::Series).
//!
//! # Indicators
//!
//! | Indicator | Config | Outputs |
//! |-----------|--------|---------|
//! | Bollinger Bands | [`Bollinger`] | `mavg`, `hband`, `lband`, `wband`, `pband`, band indicators |
//! | RSI | [`Rsi`] | `rsi` |
//! | MACD | [`Macd`] | `macd`, `macd_signal`, `macd_diff` |
//! | Rate of Change | [`Roc`] | `roc` |
//! | True Strength Index | [`Tsi`] | `tsi` |

pub mod bollinger;
pub mod macd;
pub mod roc;
pub mod rsi;
pub mod tsi;

pub use bollinger::{Bollinger, BollingerBands};
pub use macd::{Macd, MacdIndicator};
pub use roc::{Roc, RocIndicator};
pub use rsi::{Rsi, RsiIndicator};
pub use tsi::{Tsi, TsiIndicator};
