//! Scatter plot of the first two numeric columns.

use super::ChartBuilder;
use shared::chart::{ScatterChart, ScatterPoint};
use shared::{ChartSlot, ChartSpec, ColumnClassification, Dataset};

pub struct CorrelationChart;

impl ChartBuilder for CorrelationChart {
    fn slot(&self) -> ChartSlot {
        ChartSlot::Scatter
    }

    fn build(&self, dataset: &Dataset, columns: &ColumnClassification) -> Option<ChartSpec> {
        let x_column = columns.numeric_columns.first()?;
        let y_column = columns.numeric_columns.get(1)?;
        let x = dataset.column_index(x_column)?;
        let y = dataset.column_index(y_column)?;

        let points = dataset
            .rows()
            .iter()
            .filter_map(|row| {
                Some(ScatterPoint {
                    x: row.get(x).as_number()?,
                    y: row.get(y).as_number()?,
                })
            })
            .collect();

        Some(ChartSpec::Scatter(ScatterChart {
            title: format!("Correlation: {} vs {}", x_column, y_column),
            series_label: format!("{} vs {}", x_column, y_column),
            x_label: x_column.clone(),
            y_label: y_column.clone(),
            points,
        }))
    }
}
