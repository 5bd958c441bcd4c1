//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use sonic_core::RelayConfig;
use sonic_telegram::TelegramClient;

use crate::staging::StagingArea;
use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: RelayConfig) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_tracing();

    tracing::info!("Configuration loaded and validated successfully");

    let telegram =
        TelegramClient::new(&config).context("Failed to create Bot API client")?;

    let staging = StagingArea::new(&config.staging_dir)
        .await
        .context("Failed to create staging directory")?;

    let state = Arc::new(AppState::new(config.clone(), telegram, staging));

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
