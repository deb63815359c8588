//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use crate::view::{Figure, SourceWidget, TargetCanvas, WidgetState};
use serde::{Deserialize, Serialize};

// ============================================
// CALLBACK DTOs
// ============================================

/// Widget-changed event sent by the dashboard frontend
#[derive(Debug, Deserialize)]
pub struct CallbackRequest {
    /// Widget that fired the event
    pub widget: SourceWidget,
    /// Current value of every input widget
    #[serde(flatten)]
    pub state: WidgetState,
}

/// Canvas replacements computed for one event
#[derive(Debug, Serialize)]
pub struct CallbackResponse {
    pub updates: Vec<CanvasUpdate>,
}

/// One recomputed figure and the canvas it replaces
#[derive(Debug, Serialize)]
pub struct CanvasUpdate {
    pub canvas: TargetCanvas,
    pub figure: Figure,
}

// ============================================
// SITES DTOs
// ============================================

/// Dropdown options and slider domain for the dashboard frontend
#[derive(Debug, Serialize)]
pub struct SitesResponse {
    /// "All" sentinel followed by the distinct launch sites
    pub sites: Vec<String>,
    /// Fixed payload slider domain
    pub payload_slider: PayloadSliderSpec,
}

/// Payload range slider domain
#[derive(Debug, Serialize)]
pub struct PayloadSliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Tick mark spacing
    pub tick: f64,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Number of launch records loaded
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
