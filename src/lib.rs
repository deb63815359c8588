//! # Launchboard
//!
//! Interactive web dashboard over the static SpaceX launch records CSV:
//! a pie chart of launch-success proportions and a scatter plot of payload
//! mass versus launch outcome, filterable by launch site and payload range.
//!
//! The dataset is fetched once at startup and held immutable in memory for
//! the process lifetime; every widget-changed event from the browser
//! re-invokes a pure view function and replaces one chart canvas.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV fetch/parse and the immutable in-memory record set
//! - [`view`]: pure view functions and the widget→canvas dispatch table
//! - [`api`]: dashboard page, callback endpoint, and health routes (Axum)
//! - [`config`]: TOML config with environment variable overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchboard::api::{serve, AppState};
//! use launchboard::config::Config;
//! use launchboard::dataset::fetch_dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!
//!     // Fatal if the fetch or parse fails; there is nothing to serve
//!     let dataset = Arc::new(fetch_dataset(&config.dataset.url).await?);
//!
//!     let state = AppState::new(dataset, config.server.clone());
//!     serve(state, &config.server).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod view;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, AppState};
pub use config::{Config, ConfigError};
pub use dataset::{DatasetError, LaunchDataset, LaunchRecord, ALL_SITES};
pub use view::{
    dispatch, payload_scatter, success_pie, Figure, PieFigure, ScatterFigure, SourceWidget,
    TargetCanvas, WidgetState,
};
