//! Column-oriented table and the row sanitizer.
//!
//! A [`Table`] is an ordered set of named, equal-length columns. Numeric
//! columns hold `f64` prices or indicator values; text columns carry labels
//! (dates, tickers) alongside them.
//!
//! [`sanitize`] removes the rows an export or charting collaborator cannot
//! use: any row where a numeric column holds an overflowing magnitude
//! (`>= exp(709)`, which includes ±inf), an exact zero, or NaN.
//!
//! # Example
//!
//! ```
//! use ta_engine::table::{sanitize, Column, Table};
//!
//! let table = Table::new()
//!     .with_column("date", Column::Text(vec!["d1".into(), "d2".into(), "d3".into()]))
//!     .unwrap()
//!     .with_column("close", Column::Numeric(vec![10.0, 0.0, 11.0]))
//!     .unwrap();
//!
//! let clean = sanitize(&table);
//! assert_eq!(clean.rows(), 2);
//! assert_eq!(clean.numeric("close").unwrap(), &[10.0, 11.0]);
//! ```

use tracing::debug;

use crate::error::{Error, Result};

/// Natural log of the largest magnitude a numeric cell may hold.
const OVERFLOW_EXPONENT: f64 = 709.0;

/// A single table column.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Floating-point values.
    Numeric(Vec<f64>),
    /// Free-form labels, never examined by [`sanitize`].
    Text(Vec<String>),
}

impl Column {
    /// Returns the number of rows in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    /// Returns true if the column has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the values if this is a numeric column.
    #[must_use]
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Self::Numeric(values) => Some(values),
            Self::Text(_) => None,
        }
    }

    /// Returns the labels if this is a text column.
    #[must_use]
    pub fn as_text(&self) -> Option<&[String]> {
        match self {
            Self::Numeric(_) => None,
            Self::Text(values) => Some(values),
        }
    }

    fn select(&self, rows: &[usize]) -> Self {
        match self {
            Self::Numeric(values) => Self::Numeric(rows.iter().map(|&i| values[i]).collect()),
            Self::Text(values) => Self::Text(rows.iter().map(|&i| values[i].clone()).collect()),
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Self::Numeric(values)
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Self::Text(values)
    }
}

/// Ordered, named, equal-length columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Column)>,
    rows: usize,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(name, column)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `Error::ColumnLength` if the columns differ in length.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, column) in columns {
            table.insert(name, column)?;
        }
        Ok(table)
    }

    /// Adds a column, builder style.
    ///
    /// # Errors
    ///
    /// See [`Table::insert`].
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Result<Self> {
        self.insert(name, column)?;
        Ok(self)
    }

    /// Appends a column, or replaces the column with the same name in place.
    ///
    /// The first column of an empty table fixes the row count.
    ///
    /// # Errors
    ///
    /// Returns `Error::ColumnLength` if the column length differs from the
    /// table's row count.
    pub fn insert(&mut self, name: impl Into<String>, column: Column) -> Result<()> {
        let name = name.into();
        let replaces_only = self.columns.len() == 1 && self.columns[0].0 == name;
        if self.columns.is_empty() || replaces_only {
            self.rows = column.len();
        } else if column.len() != self.rows {
            return Err(Error::ColumnLength {
                column: name,
                expected: self.rows,
                actual: column.len(),
            });
        }

        match self.columns.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = column,
            None => self.columns.push((name, column)),
        }
        Ok(())
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, column)| column)
    }

    /// Looks up a numeric column by name.
    #[must_use]
    pub fn numeric(&self, name: &str) -> Option<&[f64]> {
        self.column(name).and_then(Column::as_numeric)
    }

    /// Iterates over the column names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates over `(name, column)` pairs in order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(name, column)| (name.as_str(), column))
    }

    fn select_rows(&self, rows: &[usize]) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|(name, column)| (name.clone(), column.select(rows)))
                .collect(),
            rows: rows.len(),
        }
    }
}

/// Returns true if a numeric cell can be kept by [`sanitize`].
#[inline]
#[must_use]
pub fn is_usable(value: f64) -> bool {
    !value.is_nan() && value != 0.0 && value.abs() < OVERFLOW_EXPONENT.exp()
}

/// Returns a copy of `table` without the rows that hold an unusable numeric
/// value: NaN, an exact zero, or a magnitude of at least `exp(709)`.
///
/// Text columns are carried through unexamined and column order is kept.
#[must_use]
pub fn sanitize(table: &Table) -> Table {
    let numeric: Vec<&[f64]> = table
        .columns
        .iter()
        .filter_map(|(_, column)| column.as_numeric())
        .collect();

    let keep: Vec<usize> = (0..table.rows)
        .filter(|&row| numeric.iter().all(|values| is_usable(values[row])))
        .collect();

    debug!(
        rows = table.rows,
        dropped = table.rows - keep.len(),
        "sanitized table"
    );

    table.select_rows(&keep)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    fn labels(values: &[&str]) -> Column {
        Column::Text(values.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_table_construction() {
        let table = Table::from_columns([
            ("date", labels(&["a", "b"])),
            ("close", Column::Numeric(vec![1.0, 2.0])),
        ])
        .unwrap();
        assert_eq!(table.rows(), 2);
        assert_eq!(table.width(), 2);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["date", "close"]);
        assert_eq!(table.numeric("close").unwrap(), &[1.0, 2.0]);
        assert!(table.numeric("date").is_none());
        assert!(table.column("volume").is_none());
    }

    #[test]
    fn test_ragged_column_rejected() {
        let err = Table::new()
            .with_column("close", Column::Numeric(vec![1.0, 2.0]))
            .unwrap()
            .with_column("open", Column::Numeric(vec![1.0]))
            .unwrap_err();
        assert_eq!(
            err,
            Error::ColumnLength {
                column: "open".to_string(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut table = Table::new();
        table.insert("close", Column::Numeric(vec![1.0, 2.0])).unwrap();
        table.insert("rsi", Column::Numeric(vec![50.0, 60.0])).unwrap();
        table.insert("close", Column::Numeric(vec![3.0, 4.0])).unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.names().next(), Some("close"));
        assert_eq!(table.numeric("close").unwrap(), &[3.0, 4.0]);
    }

    #[test]
    fn test_sanitize_drops_unusable_rows() {
        let big = 710.0_f64.exp();
        let table = Table::from_columns([
            ("date", labels(&["d1", "d2", "d3", "d4", "d5", "d6"])),
            (
                "close",
                Column::Numeric(vec![10.0, 0.0, 11.0, f64::NAN, 12.0, 13.0]),
            ),
            (
                "rsi",
                Column::Numeric(vec![55.0, 60.0, f64::INFINITY, 40.0, -big, 45.0]),
            ),
        ])
        .unwrap();

        let clean = sanitize(&table);
        assert_eq!(clean.rows(), 2);
        assert_eq!(clean.numeric("close").unwrap(), &[10.0, 13.0]);
        assert_eq!(clean.numeric("rsi").unwrap(), &[55.0, 45.0]);
        assert_eq!(
            clean.column("date").unwrap().as_text().unwrap(),
            &["d1".to_string(), "d6".to_string()]
        );
        // Input is untouched
        assert_eq!(table.rows(), 6);
    }

    #[test]
    fn test_sanitize_keeps_large_finite_values() {
        let table = Table::new()
            .with_column("x", Column::Numeric(vec![1e300, -1e300, 1e-300]))
            .unwrap();
        assert_eq!(sanitize(&table).rows(), 3);
    }

    #[test]
    fn test_sanitize_negative_zero_is_zero() {
        let table = Table::new()
            .with_column("x", Column::Numeric(vec![-0.0, 1.0]))
            .unwrap();
        assert_eq!(sanitize(&table).numeric("x").unwrap(), &[1.0]);
    }

    #[test]
    fn test_sanitize_text_only_table() {
        let table = Table::new().with_column("date", labels(&["", "b"])).unwrap();
        assert_eq!(sanitize(&table), table);
    }

    #[test]
    fn test_sanitize_empty_table() {
        let clean = sanitize(&Table::new());
        assert!(clean.is_empty());
        assert_eq!(clean.width(), 0);
    }

    #[test]
    fn test_is_usable() {
        assert!(is_usable(1.5));
        assert!(is_usable(-2.0));
        assert!(!is_usable(0.0));
        assert!(!is_usable(f64::NAN));
        assert!(!is_usable(f64::NEG_INFINITY));
        assert!(!is_usable(709.0_f64.exp()));
    }
}
