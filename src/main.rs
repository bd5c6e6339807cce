//! Pulse: a standalone health-check HTTP service.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing, builds the Axum router with the health route
//! and cross-origin policy, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulse::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use pulse::http::start_server;
use pulse::routes::create_router;
use pulse::state::AppState;

/// Pulse: a standalone health-check HTTP service
#[derive(Parser, Debug)]
#[command(name = "pulse", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "pulse=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (falls back to defaults if the file is absent)
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let filter = tracing_subscriber::EnvFilter::new(&log_filter);
    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        cors_origins = ?config.cors.allowed_origins,
        cors_credentials = config.cors.allow_credentials,
        "Loaded configuration"
    );

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state)?;

    // Start server; blocks until shutdown
    start_server(app, &config).await?;

    Ok(())
}
