//! Launchboard Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Environment variables:
//! - `LAUNCHBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `LAUNCHBOARD_PORT`: Port to listen on (default: 8050)
//! - `LAUNCHBOARD_DATASET_URL`: Launch records CSV URL
//! - `LAUNCHBOARD_LOG_LEVEL`: Log level (default: info)
//! - `LAUNCHBOARD_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter override

use clap::Parser;
use launchboard::api::{serve, AppState};
use launchboard::config::Config;
use launchboard::dataset::{fetch_dataset, load_csv_file};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// SpaceX launch records dashboard
#[derive(Debug, Parser)]
#[command(name = "launchboard", version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Load the dataset from a local CSV file instead of fetching it
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config);

    tracing::info!("Starting launchboard v{}", env!("CARGO_PKG_VERSION"));

    // Load the dataset once; any failure here is fatal and the process
    // exits without serving.
    let dataset = match &cli.csv {
        Some(path) => {
            tracing::info!("Loading launch dataset from {:?}", path);
            load_csv_file(path)?
        }
        None => fetch_dataset(&config.dataset.url).await?,
    };

    let (payload_min, payload_max) = dataset.payload_bounds();
    tracing::info!(
        "Loaded {} launch records across {} sites (payload {:.0}-{:.0} kg)",
        dataset.len(),
        dataset.site_count(),
        payload_min,
        payload_max
    );

    let state = AppState::new(Arc::new(dataset), config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("Launchboard stopped");
    Ok(())
}

/// Initialize the tracing subscriber from config, with RUST_LOG override
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("launchboard={},tower_http=info", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
