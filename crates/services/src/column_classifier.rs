//! Assign every column to exactly one semantic category.
//!
//! Checks run in priority order (time, numeric, boolean) and the first match
//! wins; anything left over is categorical.

use crate::date_parser::parse_date;
use shared::{CellValue, ColumnClassification, ColumnKind, Dataset};

const BOOLEAN_TOKENS: &[&str] = &["true", "false", "0", "1", "yes", "no"];

/// Classify all columns of a dataset, preserving header order within each list.
pub fn classify(dataset: &Dataset) -> ColumnClassification {
    let mut classification = ColumnClassification::default();

    for (index, column) in dataset.columns().iter().enumerate() {
        let values: Vec<&CellValue> = dataset.rows().iter().map(|r| r.get(index)).collect();
        classification.assign(column.clone(), classify_values(&values));
    }

    classification
}

pub fn classify_values(values: &[&CellValue]) -> ColumnKind {
    if is_time_column(values) {
        ColumnKind::Time
    } else if is_numeric_column(values) {
        ColumnKind::Numeric
    } else if is_boolean_column(values) {
        ColumnKind::Boolean
    } else {
        ColumnKind::Categorical
    }
}

/// A single hyphenated, parseable date makes the whole column time-typed.
fn is_time_column(values: &[&CellValue]) -> bool {
    values.iter().any(|value| match value {
        CellValue::Text(s) => s.contains('-') && parse_date(s).is_some(),
        _ => false,
    })
}

fn is_numeric_column(values: &[&CellValue]) -> bool {
    values.iter().all(|value| match value {
        CellValue::Empty => true,
        CellValue::Number(n) => !n.is_nan(),
        CellValue::Text(_) => false,
    })
}

fn is_boolean_column(values: &[&CellValue]) -> bool {
    values.iter().all(|value| {
        value.is_empty() || BOOLEAN_TOKENS.contains(&value.to_string().to_lowercase().as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn num(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    fn kind(values: Vec<CellValue>) -> ColumnKind {
        let refs: Vec<&CellValue> = values.iter().collect();
        classify_values(&refs)
    }

    #[test]
    fn test_time_columns() {
        assert_eq!(kind(vec![text("2024-01-01"), text("2024-02-01")]), ColumnKind::Time);
        // one date-like value is enough
        assert_eq!(kind(vec![text("2024-01-01"), text("abc")]), ColumnKind::Time);
        // slash dates carry no hyphen
        assert_eq!(kind(vec![text("01/02/2024")]), ColumnKind::Categorical);
    }

    #[test]
    fn test_numeric_columns() {
        assert_eq!(
            kind(vec![num(1.0), num(2.0), CellValue::Empty, CellValue::from("")]),
            ColumnKind::Numeric
        );
        assert_eq!(kind(vec![num(1.0), text("x")]), ColumnKind::Categorical);
        assert_eq!(kind(vec![num(f64::NAN)]), ColumnKind::Categorical);
    }

    #[test]
    fn test_boolean_columns() {
        assert_eq!(
            kind(vec![text("yes"), text("no"), CellValue::Empty]),
            ColumnKind::Boolean
        );
        assert_eq!(kind(vec![text("TRUE"), text("False")]), ColumnKind::Boolean);
        assert_eq!(kind(vec![num(1.0), text("no")]), ColumnKind::Boolean);
        assert_eq!(
            kind(vec![text("yes"), text("no"), text("unsure")]),
            ColumnKind::Categorical
        );
    }

    #[test]
    fn test_all_empty_column_is_numeric() {
        assert_eq!(kind(vec![CellValue::Empty, CellValue::Empty]), ColumnKind::Numeric);
    }

    #[test]
    fn test_classification_partitions_columns() {
        let mut ds = Dataset::new(
            ["date", "qty", "price", "ok", "city"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        ds.push_row(vec![text("2024-01-01"), num(1.0), num(9.5), text("yes"), text("Oslo")]);
        ds.push_row(vec![text("2024-01-02"), num(2.0), CellValue::Empty, text("no"), text("Rome")]);

        let c = classify(&ds);
        assert_eq!(c.time_columns, vec!["date"]);
        assert_eq!(c.numeric_columns, vec!["qty", "price"]);
        assert_eq!(c.boolean_columns, vec!["ok"]);
        assert_eq!(c.categorical_columns, vec!["city"]);

        let mut seen = HashSet::new();
        for col in c
            .time_columns
            .iter()
            .chain(&c.numeric_columns)
            .chain(&c.boolean_columns)
            .chain(&c.categorical_columns)
        {
            assert!(seen.insert(col.clone()), "{} classified twice", col);
        }
        let all: HashSet<String> = ds.columns().iter().cloned().collect();
        assert_eq!(seen, all);

        assert_eq!(classify(&ds), c);
    }
}
