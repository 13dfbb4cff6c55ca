//! Solve3 API Server
//!
//! Run with: cargo run --bin solve3-api
//!
//! # Configuration
//!
//! Read from `config.toml` (see `solve3-cli config`), then overridden by:
//! - `SOLVE3_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SOLVE3_API_PORT`: Port to listen on (default: 8090)
//! - `SOLVE3_TOKEN_PRICE`: Default token price
//! - `SOLVE3_HORIZON`: Default number of epochs
//! - `SOLVE3_LOG_LEVEL` / `SOLVE3_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Log filter, takes precedence over the level

use solve3::api::{serve, AppState};
use solve3::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    config.logging.init_tracing();

    tracing::info!("Starting Solve3 API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Defaults: horizon={} token_price={} export={}",
        config.defaults.schedule.horizon,
        config.defaults.emissions.token_price,
        config.api.enable_export
    );

    let state = AppState::from_config(&config);

    tracing::info!("Starting server on {}:{}", config.api.host, config.api.port);
    serve(state, &config.api).await?;

    tracing::info!("Solve3 API server stopped");
    Ok(())
}
