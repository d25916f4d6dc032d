//! Startup helpers for the Airwave station.
//!
//! Bootstrap order matters: the catalog is fully ingested before the server
//! starts taking traffic, so the readiness gate only ever rejects requests
//! from clients that connected through some other channel too early.

use std::process::ExitCode;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::engine::{CatalogSummarizer, StationState};
use crate::llm::{ModelBackend, OpenAiClient};
use crate::server::{self, AppState};

/// Environment variable holding the provider API key.
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Run the station: ingest the catalog, then serve until shutdown.
///
/// # Returns
/// `ExitCode::SUCCESS` on graceful shutdown, `1` on any bootstrap or
/// server failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Airwave Agent v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_env();
    if let Err(err) = config.validate() {
        tracing::error!("Invalid configuration: {err}");
        return ExitCode::from(1);
    }

    let Ok(api_key) = std::env::var(API_KEY_ENV) else {
        tracing::error!("{API_KEY_ENV} is not set");
        return ExitCode::from(1);
    };

    let backend: Arc<dyn ModelBackend> = match OpenAiClient::new(api_key, &config.base_url) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            tracing::error!("Failed to create model client: {err}");
            return ExitCode::from(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(err) => {
            tracing::error!("Failed to create runtime: {err}");
            return ExitCode::from(1);
        }
    };

    rt.block_on(async move {
        let station = Arc::new(StationState::new());

        let summarizer =
            CatalogSummarizer::new(Arc::clone(&backend), Arc::clone(&station), &config);
        if let Err(err) = summarizer.bootstrap(&config.catalog_path).await {
            // No partial service: a half-ingested catalog would silently
            // shrink what the host can play.
            tracing::error!("Catalog bootstrap failed: {err}");
            return ExitCode::from(1);
        }

        let port = config.server_port;
        let state = AppState::new(config, backend, station);

        if let Err(err) = server::run_server(state, port).await {
            tracing::error!("Server error: {err}");
            return ExitCode::from(1);
        }

        ExitCode::SUCCESS
    })
}
