// API server entry point
//
// Usage: cargo run --features api --bin api_server

use fortune_scorer_rust::{create_router, AppConfig, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fortune_scorer_rust=info,tower_http=debug,axum=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = AppConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  CHART_TIMEOUT_MS: {}", config.chart_timeout.as_millis());
    tracing::info!("  SYNC_MAX_RETRIES: {}", config.sync_max_retries);
    tracing::info!("  SYNC_RETRY_DELAY_MS: {}", config.sync_retry_delay.as_millis());
    tracing::info!("  REPORT_CACHE_TTL_SECS: {}", config.report_cache_ttl.as_secs());
    tracing::info!("  REPORT_CACHE_CAPACITY: {}", config.report_cache_capacity);

    let port = config.port;

    // No calculator library is linked in; clients send precomputed charts
    let state = AppState::new(config, None);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
