//! In-memory table produced by the CSV loader.
//!
//! Values are kept as a small tagged variant so the classifier can match on
//! them exhaustively instead of guessing at runtime types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single parsed cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Numeric-looking field, typed during parsing
    Number(f64),
    /// Anything else that is not blank
    Text(String),
    /// Null or empty string
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `-0` and `0` print the same in a table cell
            CellValue::Number(n) if *n == 0.0 => write!(f, "0"),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

/// One data line, aligned with [`Dataset::columns`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    values: Vec<CellValue>,
}

impl Row {
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    pub fn get(&self, column: usize) -> &CellValue {
        self.values.get(column).unwrap_or(&CellValue::Empty)
    }

    /// True when every value is null or empty
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(CellValue::is_empty)
    }
}

/// Header-derived columns plus the rows parsed under them.
///
/// Every row holds exactly one value per column: short records are padded
/// with [`CellValue::Empty`] and surplus fields are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, normalising its width to the column count.
    pub fn push_row(&mut self, mut values: Vec<CellValue>) {
        values.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(Row { values });
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of one column across all rows, in row order.
    ///
    /// Unknown column names yield an empty iterator.
    pub fn column_values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a CellValue> + 'a {
        let index = self.column_index(name);
        self.rows
            .iter()
            .filter_map(move |row| index.map(|i| row.get(i)))
    }

    /// Drop rows whose every value is null or empty.
    pub fn without_blank_rows(mut self) -> Self {
        self.rows.retain(|row| !row.is_blank());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let mut ds = Dataset::new(vec!["a".into(), "b".into()]);
        ds.push_row(vec![CellValue::Number(1.0), "x".into()]);
        ds.push_row(vec![CellValue::Empty]);
        ds.push_row(vec![CellValue::Number(3.0), "z".into(), "extra".into()]);
        ds
    }

    #[test]
    fn rows_are_normalised_to_column_count() {
        let ds = sample();
        assert!(ds.rows().iter().all(|r| r.values().len() == 2));
        assert_eq!(ds.rows()[1].get(1), &CellValue::Empty);
    }

    #[test]
    fn blank_rows_are_dropped() {
        let ds = sample().without_blank_rows();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows()[1].get(0), &CellValue::Number(3.0));
    }

    #[test]
    fn column_values_follow_row_order() {
        let ds = sample();
        let values: Vec<String> = ds.column_values("b").map(|v| v.to_string()).collect();
        assert_eq!(values, vec!["x", "", "z"]);
        assert_eq!(ds.column_values("missing").count(), 0);
    }

    #[test]
    fn display_uses_natural_string_form() {
        assert_eq!(CellValue::Number(2.0).to_string(), "2");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Number(-0.0).to_string(), "0");
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::from("").to_string(), "");
    }
}
