//! Dashboard Route
//!
//! Serves the single-page dashboard UI. The page is embedded at compile
//! time; widget options and chart data arrive through the JSON API.

use axum::response::Html;

const DASHBOARD_HTML: &str = include_str!("../../../assets/dashboard.html");

/// GET /
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
