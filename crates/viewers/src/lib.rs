//! Report sinks for csvscope
//!
//! This crate renders inspection results as a standalone HTML page:
//! - Chart.js configurations for the line, bar, pie and scatter regions
//! - The data table with its row-number column
//! - The page that embeds both, optionally opened in the system browser

pub mod chart_board;
pub mod chartjs;
pub mod html_report;
pub mod table_view;
pub mod theme;

pub use chart_board::ChartBoard;
pub use html_report::{open_in_browser, HtmlReport};
pub use table_view::TableView;
pub use theme::Theme;

/// Escape HTML special characters
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
