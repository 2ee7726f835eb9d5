//! Renderer-agnostic chart configurations and the handles that track them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four chart regions of a report. At most one live chart per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartSlot {
    Line,
    Bar,
    Pie,
    Scatter,
}

impl ChartSlot {
    pub fn all() -> &'static [ChartSlot] {
        &[
            ChartSlot::Line,
            ChartSlot::Bar,
            ChartSlot::Pie,
            ChartSlot::Scatter,
        ]
    }

    /// Element id of the container the chart is drawn into
    pub fn container_id(&self) -> &'static str {
        match self {
            ChartSlot::Line => "lineChart",
            ChartSlot::Bar => "barChart",
            ChartSlot::Pie => "pieChart",
            ChartSlot::Scatter => "scatterChart",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChartSlot::Line => "Time Series",
            ChartSlot::Bar => "Numeric Distribution",
            ChartSlot::Pie => "Category Distribution",
            ChartSlot::Scatter => "Correlation",
        }
    }
}

/// Opaque handle to a rendered chart.
///
/// Handles are not `Clone`: destroying one consumes it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ChartHandle {
    id: Uuid,
    slot: ChartSlot,
}

impl ChartHandle {
    pub fn new(slot: ChartSlot) -> Self {
        Self {
            id: Uuid::new_v4(),
            slot,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn slot(&self) -> ChartSlot {
        self.slot
    }
}

/// Values over a sorted date axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub series_label: String,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

/// One bar per row of the first numeric column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub series_label: String,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
}

/// Frequency of each distinct value, in first-encounter order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub series_label: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartSpec {
    Line(LineChart),
    Bar(BarChart),
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn slot(&self) -> ChartSlot {
        match self {
            ChartSpec::Line(_) => ChartSlot::Line,
            ChartSpec::Bar(_) => ChartSlot::Bar,
            ChartSpec::Pie(_) => ChartSlot::Pie,
            ChartSpec::Scatter(_) => ChartSlot::Scatter,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Line(c) => &c.title,
            ChartSpec::Bar(c) => &c.title,
            ChartSpec::Pie(c) => &c.title,
            ChartSpec::Scatter(c) => &c.title,
        }
    }
}
