//! Pie chart of value frequencies in the first categorical column.

use super::ChartBuilder;
use shared::chart::{PieChart, PieSlice};
use shared::{ChartSlot, ChartSpec, ColumnClassification, Dataset};
use std::collections::HashMap;

pub struct CategoryChart;

impl ChartBuilder for CategoryChart {
    fn slot(&self) -> ChartSlot {
        ChartSlot::Pie
    }

    fn build(&self, dataset: &Dataset, columns: &ColumnClassification) -> Option<ChartSpec> {
        let column = columns.first_categorical()?;
        let c = dataset.column_index(column)?;

        let mut slices: Vec<PieSlice> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for row in dataset.rows() {
            let key = row.get(c).to_string();
            match positions.get(&key) {
                Some(&i) => slices[i].count += 1,
                None => {
                    positions.insert(key.clone(), slices.len());
                    slices.push(PieSlice { label: key, count: 1 });
                }
            }
        }

        Some(ChartSpec::Pie(PieChart {
            title: format!("Distribution of {}", column),
            slices,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::fixtures::{dataset, num, text};
    use crate::column_classifier::classify;
    use shared::CellValue;

    #[test]
    fn counts_in_first_encounter_order() {
        let ds = dataset(
            &["city"],
            vec![
                vec![text("Rome")],
                vec![text("Oslo")],
                vec![text("Rome")],
                vec![CellValue::Empty],
                vec![num(7.0)],
            ],
        );
        let Some(ChartSpec::Pie(chart)) = CategoryChart.build(&ds, &classify(&ds)) else {
            panic!("expected pie chart");
        };

        let pairs: Vec<(&str, usize)> = chart
            .slices
            .iter()
            .map(|s| (s.label.as_str(), s.count))
            .collect();
        assert_eq!(pairs, vec![("Rome", 2), ("Oslo", 1), ("", 1), ("7", 1)]);
        assert_eq!(chart.title, "Distribution of city");
    }

    #[test]
    fn declines_without_categorical_column() {
        let ds = dataset(&["n"], vec![vec![num(1.0)]]);
        assert!(CategoryChart.build(&ds, &classify(&ds)).is_none());
    }
}
