//! Data table region of the report.

use crate::escape_html;
use shared::{TablePreview, TableSink};

/// Element id of the table
pub const TABLE_ID: &str = "dataTable";

#[derive(Debug, Default)]
pub struct TableView {
    table: Option<TablePreview>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    pub fn row_count(&self) -> usize {
        self.table.as_ref().map(|t| t.rows.len()).unwrap_or(0)
    }

    /// `<table>` markup; the first column of each row is the row number.
    pub fn to_html(&self) -> String {
        let mut html = format!("<table id=\"{}\">\n<thead>\n", TABLE_ID);

        let Some(table) = &self.table else {
            html.push_str("</thead>\n<tbody>\n</tbody>\n</table>");
            return html;
        };

        html.push_str("<tr>");
        for header in &table.header {
            html.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        html.push_str("</tr>\n</thead>\n<tbody>\n");

        for row in &table.rows {
            html.push_str("<tr>");
            for (i, cell) in row.iter().enumerate() {
                if i == 0 {
                    html.push_str(&format!("<td class=\"sno\">{}</td>", escape_html(cell)));
                } else {
                    html.push_str(&format!("<td>{}</td>", escape_html(cell)));
                }
            }
            html.push_str("</tr>\n");
        }

        html.push_str("</tbody>\n</table>");
        html
    }
}

impl TableSink for TableView {
    fn replace(&mut self, table: TablePreview) {
        self.table = Some(table);
    }
}
