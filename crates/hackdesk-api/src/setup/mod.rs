//! Application setup and initialization
//!
//! Wiring lives here rather than in main.rs so integration tests can build the same router.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use hackdesk_core::{Config, TimestampIdStrategy};
use hackdesk_storage::PersistenceRouter;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first
    crate::telemetry::init_telemetry(config.log_format(), config.environment())
        .context("Failed to initialize telemetry")?;

    tracing::info!(
        environment = %config.environment(),
        mode = %config.mode(),
        schema = ?config.schema,
        "Configuration loaded and validated successfully"
    );

    // Select the persistence backend once for the lifetime of the process
    let persistence = PersistenceRouter::from_config(&config, Arc::new(TimestampIdStrategy))
        .context("Failed to initialize persistence")?;

    let state = Arc::new(AppState::new(config.clone(), persistence));

    let router = routes::setup_routes(&config, state.clone()).await?;

    Ok((state, router))
}
