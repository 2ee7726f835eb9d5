//! Chart.js configuration writer.
//!
//! Turns a [`ChartSpec`] into the JSON object passed to `new Chart(ctx, config)`.

use crate::theme::{with_alpha, Theme};
use serde_json::{json, Value};
use shared::chart::{BarChart, LineChart, PieChart, ScatterChart};
use shared::ChartSpec;

pub fn to_config(spec: &ChartSpec, theme: &Theme) -> Value {
    match spec {
        ChartSpec::Line(chart) => line(chart, theme),
        ChartSpec::Bar(chart) => bar(chart, theme),
        ChartSpec::Pie(chart) => pie(chart, theme),
        ChartSpec::Scatter(chart) => scatter(chart, theme),
    }
}

fn title(text: &str) -> Value {
    json!({ "title": { "display": true, "text": text } })
}

fn line(chart: &LineChart, theme: &Theme) -> Value {
    json!({
        "type": "line",
        "data": {
            "labels": chart.labels,
            "datasets": [{
                "label": chart.series_label,
                "data": chart.values,
                "borderColor": theme.primary,
                "backgroundColor": with_alpha(theme.primary, "20"),
                "fill": true,
                "tension": 0.4
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": title(&chart.title),
            "scales": { "y": { "beginAtZero": true } }
        }
    })
}

fn bar(chart: &BarChart, theme: &Theme) -> Value {
    let backgrounds: Vec<String> = theme
        .chart_colors
        .iter()
        .map(|c| with_alpha(c, "80"))
        .collect();

    json!({
        "type": "bar",
        "data": {
            "labels": chart.labels,
            "datasets": [{
                "label": chart.series_label,
                "data": chart.values,
                "backgroundColor": backgrounds,
                "borderColor": theme.chart_colors,
                "borderWidth": 1
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": title(&chart.title),
            "scales": { "x": { "ticks": { "maxRotation": 45, "minRotation": 45 } } }
        }
    })
}

fn pie(chart: &PieChart, theme: &Theme) -> Value {
    let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
    let counts: Vec<usize> = chart.slices.iter().map(|s| s.count).collect();

    json!({
        "type": "pie",
        "data": {
            "labels": labels,
            "datasets": [{
                "data": counts,
                "backgroundColor": theme.chart_colors,
                "borderColor": theme.white,
                "borderWidth": 2
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": title(&chart.title)
        }
    })
}

fn scatter(chart: &ScatterChart, theme: &Theme) -> Value {
    json!({
        "type": "scatter",
        "data": {
            "datasets": [{
                "label": chart.series_label,
                "data": chart.points,
                "backgroundColor": with_alpha(theme.primary, "80"),
                "borderColor": theme.primary
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": title(&chart.title),
            "scales": {
                "x": { "title": { "display": true, "text": chart.x_label } },
                "y": { "title": { "display": true, "text": chart.y_label } }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::chart::{PieSlice, ScatterPoint};

    #[test]
    fn test_line_config() {
        let spec = ChartSpec::Line(LineChart {
            title: "sales Over Time".into(),
            series_label: "sales".into(),
            labels: vec!["1/1/2024".into(), "2/1/2024".into()],
            values: vec![Some(10.0), None],
        });
        let config = to_config(&spec, &Theme::default());

        assert_eq!(config["type"], "line");
        assert_eq!(config["data"]["datasets"][0]["data"], json!([10.0, null]));
        assert_eq!(config["data"]["datasets"][0]["backgroundColor"], "#DC6D1820");
        assert_eq!(config["options"]["plugins"]["title"]["text"], "sales Over Time");
        assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
    }

    #[test]
    fn test_bar_cycles_palette() {
        let spec = ChartSpec::Bar(BarChart {
            title: "Distribution of qty".into(),
            series_label: "qty".into(),
            labels: vec!["a".into()],
            values: vec![Some(1.0)],
        });
        let config = to_config(&spec, &Theme::default());
        let dataset = &config["data"]["datasets"][0];

        assert_eq!(dataset["backgroundColor"].as_array().unwrap().len(), 6);
        assert_eq!(dataset["backgroundColor"][0], "#DC6D1880");
        assert_eq!(dataset["borderColor"][5], "#8C5A1C");
    }

    #[test]
    fn test_pie_and_scatter_configs() {
        let pie = ChartSpec::Pie(PieChart {
            title: "Distribution of city".into(),
            slices: vec![PieSlice { label: "Oslo".into(), count: 2 }],
        });
        let config = to_config(&pie, &Theme::default());
        assert_eq!(config["data"]["labels"], json!(["Oslo"]));
        assert_eq!(config["data"]["datasets"][0]["data"], json!([2]));
        assert_eq!(config["data"]["datasets"][0]["borderColor"], "#FFFFFF");

        let scatter = ChartSpec::Scatter(ScatterChart {
            title: "Correlation: a vs b".into(),
            series_label: "a vs b".into(),
            x_label: "a".into(),
            y_label: "b".into(),
            points: vec![ScatterPoint { x: 1.0, y: 2.0 }],
        });
        let config = to_config(&scatter, &Theme::default());
        assert_eq!(config["data"]["datasets"][0]["data"], json!([{ "x": 1.0, "y": 2.0 }]));
        assert_eq!(config["options"]["scales"]["x"]["title"]["text"], "a");
    }
}
