//! Semantic column categories used to pick chart types.

use serde::{Deserialize, Serialize};

/// Category a column is assigned to, listed in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Time,
    Numeric,
    Boolean,
    Categorical,
}

impl ColumnKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ColumnKind::Time => "Time",
            ColumnKind::Numeric => "Numeric",
            ColumnKind::Boolean => "Boolean",
            ColumnKind::Categorical => "Categorical",
        }
    }
}

/// Four disjoint, header-ordered lists of column names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnClassification {
    pub numeric_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
    pub time_columns: Vec<String>,
    pub boolean_columns: Vec<String>,
}

impl ColumnClassification {
    pub fn assign(&mut self, column: impl Into<String>, kind: ColumnKind) {
        let column = column.into();
        match kind {
            ColumnKind::Time => self.time_columns.push(column),
            ColumnKind::Numeric => self.numeric_columns.push(column),
            ColumnKind::Boolean => self.boolean_columns.push(column),
            ColumnKind::Categorical => self.categorical_columns.push(column),
        }
    }

    pub fn kind_of(&self, column: &str) -> Option<ColumnKind> {
        let has = |list: &[String]| list.iter().any(|c| c == column);
        if has(&self.time_columns) {
            Some(ColumnKind::Time)
        } else if has(&self.numeric_columns) {
            Some(ColumnKind::Numeric)
        } else if has(&self.boolean_columns) {
            Some(ColumnKind::Boolean)
        } else if has(&self.categorical_columns) {
            Some(ColumnKind::Categorical)
        } else {
            None
        }
    }

    pub fn first_time(&self) -> Option<&str> {
        self.time_columns.first().map(String::as_str)
    }

    pub fn first_numeric(&self) -> Option<&str> {
        self.numeric_columns.first().map(String::as_str)
    }

    pub fn first_categorical(&self) -> Option<&str> {
        self.categorical_columns.first().map(String::as_str)
    }

    /// Total number of classified columns
    pub fn len(&self) -> usize {
        self.numeric_columns.len()
            + self.categorical_columns.len()
            + self.time_columns.len()
            + self.boolean_columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
