//! Event Dispatch Table
//!
//! Explicit wiring from (source widget, value-changed event) to (handler,
//! target canvas). The callback route looks an event up here instead of
//! registering closures anywhere, so the dashboard's full reactive graph is
//! readable in one place.

use super::figure::Figure;
use super::{payload_scatter, success_pie};
use crate::dataset::LaunchDataset;
use serde::{Deserialize, Serialize};

/// Input widgets that emit value-changed events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceWidget {
    #[serde(rename = "launch-site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-range-slider")]
    PayloadSlider,
}

/// Chart canvases that receive replacement figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetCanvas {
    #[serde(rename = "success-pie-chart")]
    SuccessPie,
    #[serde(rename = "success-payload-scatter-chart")]
    PayloadScatter,
}

/// Current value of every input widget, sent along with each event
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetState {
    /// Dropdown selection: a site name or the "All" sentinel
    pub site: String,
    /// Slider selection: inclusive (low, high) payload bounds in kg
    pub payload_range: (f64, f64),
}

type Handler = fn(&LaunchDataset, &WidgetState) -> Figure;

struct Binding {
    source: SourceWidget,
    target: TargetCanvas,
    handler: Handler,
}

/// The dashboard's full reactive wiring
const BINDINGS: [Binding; 3] = [
    Binding {
        source: SourceWidget::SiteDropdown,
        target: TargetCanvas::SuccessPie,
        handler: pie_handler,
    },
    Binding {
        source: SourceWidget::SiteDropdown,
        target: TargetCanvas::PayloadScatter,
        handler: scatter_handler,
    },
    Binding {
        source: SourceWidget::PayloadSlider,
        target: TargetCanvas::PayloadScatter,
        handler: scatter_handler,
    },
];

fn pie_handler(dataset: &LaunchDataset, state: &WidgetState) -> Figure {
    Figure::Pie(success_pie(dataset, &state.site))
}

fn scatter_handler(dataset: &LaunchDataset, state: &WidgetState) -> Figure {
    Figure::Scatter(payload_scatter(dataset, &state.site, state.payload_range))
}

/// Recompute every canvas wired to `source` from the current widget state.
pub fn dispatch(
    dataset: &LaunchDataset,
    source: SourceWidget,
    state: &WidgetState,
) -> Vec<(TargetCanvas, Figure)> {
    BINDINGS
        .iter()
        .filter(|binding| binding.source == source)
        .map(|binding| (binding.target, (binding.handler)(dataset, state)))
        .collect()
}
