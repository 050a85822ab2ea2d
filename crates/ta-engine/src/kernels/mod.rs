//! Numeric kernels shared by the moving-average helpers and the indicators.
//!
//! - [`ewm`]: exponentially weighted mean with gap-aware decay
//! - [`rolling`]: windowed mean and population standard deviation with a
//!   minimum-observations rule

pub mod ewm;
pub mod rolling;
