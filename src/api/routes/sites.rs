//! Sites Route
//!
//! Dropdown options and the slider domain, fetched once by the frontend on
//! page load.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{PayloadSliderSpec, SitesResponse};
use crate::api::state::AppState;
use crate::view::{
    PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP, PAYLOAD_SLIDER_TICK,
};

/// GET /api/v1/sites
pub async fn list_sites(State(state): State<Arc<AppState>>) -> Json<SitesResponse> {
    Json(SitesResponse {
        sites: state.dataset.sites().to_vec(),
        payload_slider: PayloadSliderSpec {
            min: PAYLOAD_SLIDER_MIN,
            max: PAYLOAD_SLIDER_MAX,
            step: PAYLOAD_SLIDER_STEP,
            tick: PAYLOAD_SLIDER_TICK,
        },
    })
}
