//! Error types for ta-engine.
//!
//! Insufficient history is deliberately absent from this taxonomy: warm-up
//! positions are reported as NaN in the output series, never as an error.
//! Division-by-zero outcomes are not errors either; each indicator documents
//! whether it special-cases them.

use thiserror::Error;

/// The main error type for ta-engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A selection parameter was outside its enumerated set, or a numeric
    /// parameter was not usable (e.g. a NaN band multiplier).
    #[error("invalid argument `{argument}` = {value:?}: expected {expected}")]
    InvalidArgument {
        /// Name of the offending parameter.
        argument: &'static str,
        /// The value that was supplied.
        value: String,
        /// Description of the accepted values.
        expected: &'static str,
    },

    /// A window parameter is invalid.
    ///
    /// Every rolling or exponential computation needs at least one
    /// observation in its window.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// Two series that must be aligned position-by-position differ in length.
    #[error("length mismatch in {context}: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Length of the reference series.
        expected: usize,
        /// Length of the mismatched series.
        actual: usize,
        /// Operation that detected the mismatch.
        context: &'static str,
    },

    /// A table column does not have the same number of rows as the table.
    #[error("column `{column}` has {actual} rows, table has {expected}")]
    ColumnLength {
        /// Name of the ragged column.
        column: String,
        /// Row count of the table.
        expected: usize,
        /// Row count of the column.
        actual: usize,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when using `NumCast::from()` to convert a parameter
    /// (e.g. a `usize` window or an `f64` multiplier) into the series element
    /// type and the conversion fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the ta-engine Error type.
pub type Result<T> = std::result::Result<T, Error>;
