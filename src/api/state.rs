//! Application State
//!
//! Shared state accessible by all API handlers. The dataset is immutable
//! after startup, so sharing is a plain `Arc` with no locking.

use crate::config::ServerConfig;
use crate::dataset::LaunchDataset;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The launch record set, loaded once at startup
    pub dataset: Arc<LaunchDataset>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState around an already-loaded dataset
    pub fn new(dataset: Arc<LaunchDataset>, config: ServerConfig) -> Self {
        Self {
            dataset,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
