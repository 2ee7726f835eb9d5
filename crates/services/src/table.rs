//! Tabular preview with a synthetic row-number column.

use shared::{Dataset, TablePreview, TableSink};

pub const ROW_NUMBER_HEADER: &str = "S.No.";

/// Build the preview: `S.No.` plus every column, one 1-based numbered row per record.
pub fn build_preview(dataset: &Dataset) -> TablePreview {
    let header = std::iter::once(ROW_NUMBER_HEADER.to_string())
        .chain(dataset.columns().iter().cloned())
        .collect();

    let rows = dataset
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            std::iter::once((i + 1).to_string())
                .chain(row.values().iter().map(|v| v.to_string()))
                .collect()
        })
        .collect();

    TablePreview { header, rows }
}

/// Replace the sink's table with this dataset.
pub fn render(dataset: &Dataset, sink: &mut dyn TableSink) {
    sink.replace(build_preview(dataset));
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CellValue;

    #[derive(Default)]
    struct Capture {
        tables: Vec<TablePreview>,
    }

    impl TableSink for Capture {
        fn replace(&mut self, table: TablePreview) {
            self.tables.push(table);
        }
    }

    #[test]
    fn test_row_numbers_and_empty_cells() {
        let mut ds = Dataset::new(vec!["name".into(), "qty".into()]);
        ds.push_row(vec!["widget".into(), CellValue::Number(3.0)]);
        ds.push_row(vec!["gadget".into(), CellValue::Empty]);

        let mut sink = Capture::default();
        render(&ds, &mut sink);

        let table = &sink.tables[0];
        assert_eq!(table.header, vec!["S.No.", "name", "qty"]);
        assert_eq!(table.rows[0], vec!["1", "widget", "3"]);
        assert_eq!(table.rows[1], vec!["2", "gadget", ""]);
    }
}
