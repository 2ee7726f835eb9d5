//! Chart builders.
//!
//! Each builder looks at the classified columns, picks the ones it needs and
//! either returns a [`ChartSpec`] or declines when its prerequisites are missing.

pub mod categorical;
pub mod correlation;
pub mod numeric;
pub mod time_series;

pub use categorical::CategoryChart;
pub use correlation::CorrelationChart;
pub use numeric::NumericChart;
pub use time_series::TimeSeriesChart;

use shared::{ChartSlot, ChartSpec, ColumnClassification, Dataset};

pub trait ChartBuilder {
    /// Region this builder draws into
    fn slot(&self) -> ChartSlot;

    /// Build a chart, or `None` when the required columns are absent
    fn build(&self, dataset: &Dataset, columns: &ColumnClassification) -> Option<ChartSpec>;
}

/// The four builders in display order: line, bar, pie, scatter.
pub fn default_builders(date_label_format: &str) -> Vec<Box<dyn ChartBuilder>> {
    vec![
        Box::new(TimeSeriesChart::new(date_label_format)),
        Box::new(NumericChart::new(date_label_format)),
        Box::new(CategoryChart),
        Box::new(CorrelationChart),
    ]
}
