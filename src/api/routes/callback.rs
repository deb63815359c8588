//! Callback Route
//!
//! The framework's event endpoint: widget-changed event in, chart
//! specifications out. All recomputation goes through the view-model
//! dispatch table; this handler only validates and translates.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{CallbackRequest, CallbackResponse, CanvasUpdate};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::view::dispatch;

/// POST /api/v1/callback
pub async fn widget_changed(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CallbackRequest>,
) -> ApiResult<Json<CallbackResponse>> {
    let (low, high) = request.state.payload_range;
    if !low.is_finite() || !high.is_finite() {
        return Err(ApiError::Validation(
            "payload_range bounds must be finite numbers".to_string(),
        ));
    }

    tracing::debug!(
        widget = ?request.widget,
        site = %request.state.site,
        payload_low = low,
        payload_high = high,
        "Recomputing charts"
    );

    let updates = dispatch(&state.dataset, request.widget, &request.state)
        .into_iter()
        .map(|(canvas, figure)| CanvasUpdate { canvas, figure })
        .collect();

    Ok(Json(CallbackResponse { updates }))
}
