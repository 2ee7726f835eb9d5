//! Bar chart of the first numeric column in row order.

use super::ChartBuilder;
use crate::date_parser::date_label;
use shared::chart::BarChart;
use shared::{ChartSlot, ChartSpec, ColumnClassification, Dataset};

pub struct NumericChart {
    date_label_format: String,
}

impl NumericChart {
    pub fn new(date_label_format: &str) -> Self {
        Self {
            date_label_format: date_label_format.to_string(),
        }
    }
}

impl ChartBuilder for NumericChart {
    fn slot(&self) -> ChartSlot {
        ChartSlot::Bar
    }

    fn build(&self, dataset: &Dataset, columns: &ColumnClassification) -> Option<ChartSpec> {
        let value_column = columns.first_numeric()?;
        let v = dataset.column_index(value_column)?;
        let rows = dataset.rows();

        // Label source: first categorical column, then first time column, then the values
        let categorical = columns.first_categorical().and_then(|c| dataset.column_index(c));
        let time = columns.first_time().and_then(|t| dataset.column_index(t));
        let labels: Vec<String> = if let Some(c) = categorical {
            rows.iter().map(|r| r.get(c).to_string()).collect()
        } else if let Some(t) = time {
            rows.iter()
                .map(|r| date_label(r.get(t), &self.date_label_format))
                .collect()
        } else {
            rows.iter().map(|r| r.get(v).to_string()).collect()
        };

        Some(ChartSpec::Bar(BarChart {
            title: format!("Distribution of {}", value_column),
            series_label: value_column.to_string(),
            labels,
            values: rows.iter().map(|r| r.get(v).as_number()).collect(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::fixtures::{dataset, num, text};
    use crate::column_classifier::classify;
    use shared::CellValue;

    fn bar(ds: &Dataset) -> Option<BarChart> {
        match NumericChart::new("%-m/%-d/%Y").build(ds, &classify(ds))? {
            ChartSpec::Bar(c) => Some(c),
            _ => None,
        }
    }

    #[test]
    fn labels_prefer_categorical_column() {
        let ds = dataset(
            &["when", "city", "qty"],
            vec![
                vec![text("2024-01-02"), text("Oslo"), num(4.0)],
                vec![text("2024-01-01"), text("Rome"), num(2.0)],
            ],
        );
        let chart = bar(&ds).unwrap();
        assert_eq!(chart.labels, vec!["Oslo", "Rome"]);
        assert_eq!(chart.values, vec![Some(4.0), Some(2.0)]);
        assert_eq!(chart.title, "Distribution of qty");
    }

    #[test]
    fn labels_fall_back_to_dates_then_values() {
        let dated = dataset(
            &["when", "qty"],
            vec![
                vec![text("2024-01-02"), num(4.0)],
                vec![text("2024-01-01"), CellValue::Empty],
            ],
        );
        let chart = bar(&dated).unwrap();
        assert_eq!(chart.labels, vec!["1/2/2024", "1/1/2024"]);
        assert_eq!(chart.values, vec![Some(4.0), None]);

        let bare = dataset(&["qty"], vec![vec![num(4.0)], vec![num(2.5)]]);
        assert_eq!(bar(&bare).unwrap().labels, vec!["4", "2.5"]);
    }

    #[test]
    fn declines_without_numeric_column() {
        let ds = dataset(&["city"], vec![vec![text("Oslo")]]);
        assert!(bar(&ds).is_none());
    }
}
