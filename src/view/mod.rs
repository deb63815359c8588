//! View Model
//!
//! Pure functions mapping the current filter selections to chart
//! specifications. Nothing here touches I/O or shared mutable state; the
//! HTTP layer re-invokes these functions on every widget-changed event and
//! pushes the returned figures back to the browser canvases.

pub mod dispatch;
pub mod figure;
pub mod pie;
pub mod scatter;

pub use dispatch::{dispatch, SourceWidget, TargetCanvas, WidgetState};
pub use figure::{Figure, PieFigure, ScatterFigure, ScatterTrace};
pub use pie::success_pie;
pub use scatter::payload_scatter;

/// Fixed payload slider domain rendered by the dashboard.
/// The dataset's own payload bounds are computed but only logged.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 17_500.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1.0;
pub const PAYLOAD_SLIDER_TICK: f64 = 2_500.0;
