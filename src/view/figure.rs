//! Chart Specifications
//!
//! Declarative figure descriptions serialized to JSON and rendered by the
//! charting library in the browser. These carry data and titles only; all
//! drawing is the frontend's concern.

use serde::Serialize;

/// A chart specification for one canvas
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Figure {
    Pie(PieFigure),
    Scatter(ScatterFigure),
}

/// Pie chart: labeled category → value pairs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl PieFigure {
    /// Number of slices
    pub fn slice_count(&self) -> usize {
        self.labels.len()
    }
}

/// Scatter plot: one trace per color key, one mark per record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    pub x_title: String,
    pub y_title: String,
    pub traces: Vec<ScatterTrace>,
}

impl ScatterFigure {
    /// Total number of marks across all traces
    pub fn point_count(&self) -> usize {
        self.traces.iter().map(|t| t.x.len()).sum()
    }
}

/// One colored point series within a scatter figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    /// Color key (booster version category)
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
}
