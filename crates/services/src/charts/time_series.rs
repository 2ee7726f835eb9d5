//! Line chart of the first numeric column over the first time column.

use super::ChartBuilder;
use crate::date_parser::{cell_date, format_date, INVALID_DATE};
use shared::chart::LineChart;
use shared::{ChartSlot, ChartSpec, ColumnClassification, Dataset, Row};
use std::cmp::Ordering;

pub struct TimeSeriesChart {
    date_label_format: String,
}

impl TimeSeriesChart {
    pub fn new(date_label_format: &str) -> Self {
        Self {
            date_label_format: date_label_format.to_string(),
        }
    }
}

impl ChartBuilder for TimeSeriesChart {
    fn slot(&self) -> ChartSlot {
        ChartSlot::Line
    }

    fn build(&self, dataset: &Dataset, columns: &ColumnClassification) -> Option<ChartSpec> {
        let time_column = columns.first_time()?;
        let value_column = columns.first_numeric()?;
        let t = dataset.column_index(time_column)?;
        let v = dataset.column_index(value_column)?;

        // Sort a copy; rows without a readable date go last in their original order.
        let mut sorted: Vec<(Option<chrono::NaiveDateTime>, &Row)> = dataset
            .rows()
            .iter()
            .map(|row| (cell_date(row.get(t)), row))
            .collect();
        sorted.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        let labels: Vec<String> = sorted
            .iter()
            .map(|(date, _)| match date {
                Some(dt) => format_date(dt, &self.date_label_format),
                None => INVALID_DATE.to_string(),
            })
            .collect();
        let values = sorted.iter().map(|(_, row)| row.get(v).as_number()).collect();

        Some(ChartSpec::Line(LineChart {
            title: format!("{} Over Time", value_column),
            series_label: value_column.to_string(),
            labels,
            values,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::fixtures::{dataset, num, text};
    use crate::column_classifier::classify;
    use shared::CellValue;

    fn line(spec: ChartSpec) -> LineChart {
        match spec {
            ChartSpec::Line(c) => c,
            other => panic!("expected line chart, got {:?}", other.slot()),
        }
    }

    #[test]
    fn sorts_by_date_without_touching_the_dataset() {
        let ds = dataset(
            &["date", "sales"],
            vec![
                vec![text("2024-03-01"), num(30.0)],
                vec![text("2024-01-01"), num(10.0)],
                vec![text("2024-02-01"), num(20.0)],
            ],
        );
        let before = ds.clone();
        let chart = line(
            TimeSeriesChart::new("%-m/%-d/%Y")
                .build(&ds, &classify(&ds))
                .unwrap(),
        );

        assert_eq!(chart.values, vec![Some(10.0), Some(20.0), Some(30.0)]);
        assert_eq!(chart.labels, vec!["1/1/2024", "2/1/2024", "3/1/2024"]);
        assert_eq!(chart.title, "sales Over Time");
        assert_eq!(chart.series_label, "sales");
        assert_eq!(ds, before);
    }

    #[test]
    fn unreadable_dates_sort_last() {
        let ds = dataset(
            &["date", "v"],
            vec![
                vec![text("later"), num(1.0)],
                vec![text("2024-05-01"), CellValue::Empty],
            ],
        );
        let chart = line(TimeSeriesChart::new("%Y").build(&ds, &classify(&ds)).unwrap());
        assert_eq!(chart.labels, vec!["2024", INVALID_DATE]);
        assert_eq!(chart.values, vec![None, Some(1.0)]);
    }

    #[test]
    fn declines_without_time_or_numeric_column() {
        let no_time = dataset(&["v"], vec![vec![num(1.0)]]);
        assert!(TimeSeriesChart::new("%Y")
            .build(&no_time, &classify(&no_time))
            .is_none());

        let no_numeric = dataset(&["d"], vec![vec![text("2024-01-01")]]);
        assert!(TimeSeriesChart::new("%Y")
            .build(&no_numeric, &classify(&no_numeric))
            .is_none());
    }
}
