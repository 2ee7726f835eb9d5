//! Standalone HTML report: four chart regions plus the data table.
//!
//! Chart configurations are embedded as JSON and drawn client-side by Chart.js.

use crate::chart_board::ChartBoard;
use crate::chartjs;
use crate::escape_html;
use crate::table_view::TableView;
use crate::theme::Theme;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use shared::ChartSlot;
use std::fs;
use std::path::Path;

pub struct HtmlReport {
    pub charts: ChartBoard,
    pub table: TableView,
    theme: Theme,
    chartjs_src: String,
}

impl HtmlReport {
    pub fn new(chartjs_src: impl Into<String>) -> Self {
        Self {
            charts: ChartBoard::new(),
            table: TableView::new(),
            theme: Theme::default(),
            chartjs_src: chartjs_src.into(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Chart.js configs keyed by container id, for the live charts only
    fn chart_configs(&self) -> Value {
        let mut configs = Map::new();
        for slot in ChartSlot::all() {
            if let Some(spec) = self.charts.get(*slot) {
                configs.insert(
                    slot.container_id().to_string(),
                    chartjs::to_config(spec, &self.theme),
                );
            }
        }
        Value::Object(configs)
    }

    pub fn render_page(&self, title: &str) -> String {
        let t = &self.theme;
        // `<` never appears outside strings in JSON, so escaping it keeps `</script>` out
        let configs = self.chart_configs().to_string().replace('<', "\\u003c");

        let mut cards = String::new();
        for slot in ChartSlot::all() {
            let note = if self.charts.get(*slot).is_none() {
                "<p class=\"empty\">Not enough matching columns for this chart.</p>"
            } else {
                ""
            };
            cards.push_str(&format!(
                "<section class=\"card\"><h2>{}</h2><div class=\"canvas\"><canvas id=\"{}\"></canvas></div>{}</section>\n",
                slot.display_name(),
                slot.container_id(),
                note
            ));
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<script src="{chartjs}"></script>
<style>
  body {{ margin: 0; padding: 2rem; background: {background}; color: {text}; font-family: system-ui, -apple-system, sans-serif; }}
  h1 {{ color: {primary}; }}
  .charts {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 1.5rem; margin-bottom: 2rem; }}
  .card {{ background: #fff; border: 1px solid {border}; border-radius: 10px; padding: 1rem; }}
  .card h2 {{ font-size: 1rem; margin: 0 0 .5rem; }}
  .canvas {{ position: relative; height: 320px; }}
  .empty {{ color: {border}; font-style: italic; }}
  table {{ border-collapse: collapse; width: 100%; background: #fff; }}
  th, td {{ border: 1px solid {border}; padding: .4rem .6rem; text-align: left; }}
  th {{ background: {highlight}; }}
  tbody tr:hover {{ background: {highlight}; }}
  td.sno {{ font-weight: 500; color: {primary}; }}
</style>
</head>
<body>
<h1>{title}</h1>
<div class="charts">
{cards}</div>
<div class="table-wrap">
{table}
</div>
<script id="chart-configs" type="application/json">{configs}</script>
<script>
  const configs = JSON.parse(document.getElementById('chart-configs').textContent);
  for (const [id, config] of Object.entries(configs)) {{
    new Chart(document.getElementById(id).getContext('2d'), config);
  }}
</script>
</body>
</html>
"#,
            title = escape_html(title),
            chartjs = escape_html(&self.chartjs_src),
            background = t.background,
            text = t.text,
            primary = t.primary,
            border = t.border,
            highlight = t.table_highlight,
            cards = cards,
            table = self.table.to_html(),
            configs = configs,
        )
    }

    /// Write the page, creating parent directories as needed.
    pub fn write_to(&self, path: &Path, title: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        fs::write(path, self.render_page(title))
            .with_context(|| format!("writing report {}", path.display()))?;
        tracing::info!(path = %path.display(), "report written");
        Ok(())
    }
}

/// Hand a written report to the system browser.
pub fn open_in_browser(path: &Path) -> Result<()> {
    open::that(path).with_context(|| format!("opening {} in the browser", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::chart::{PieChart, PieSlice};
    use shared::{ChartSink, ChartSpec, TablePreview, TableSink};
    use tempfile::tempdir;

    fn report_with_pie(label: &str) -> HtmlReport {
        let mut report = HtmlReport::new("chart.js");
        report.charts.create(ChartSpec::Pie(PieChart {
            title: "Distribution of city".into(),
            slices: vec![PieSlice {
                label: label.into(),
                count: 1,
            }],
        }));
        report.table.replace(TablePreview {
            header: vec!["S.No.".into(), "city".into()],
            rows: vec![vec!["1".into(), label.into()]],
        });
        report
    }

    #[test]
    fn page_contains_every_container() {
        let page = report_with_pie("Oslo").render_page("cities.csv");
        for id in ["lineChart", "barChart", "pieChart", "scatterChart", "dataTable"] {
            assert!(page.contains(&format!("id=\"{}\"", id)), "missing {}", id);
        }
        assert!(page.contains("\"pieChart\":"));
        assert!(!page.contains("\"lineChart\":"));
    }

    #[test]
    fn script_breakouts_are_escaped() {
        let page = report_with_pie("</script><b>").render_page("<x>");
        assert!(!page.contains("</script><b>"));
        assert!(page.contains("\\u003c/script>\\u003cb>"));
        assert!(page.contains("<title>&lt;x&gt;</title>"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("out").join("report.html");
        report_with_pie("Oslo").write_to(&path, "cities").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
    }
}
