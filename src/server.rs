//! HTTP server initialization and runtime setup.
//!
//! Handles program loading, state wiring, and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::program_file::load_programs;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Affiliate programs from `PROGRAMS_FILE` (if set)
/// - In-memory program and history stores
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The programs file cannot be read or is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let programs = match &config.programs_file {
        Some(path) => load_programs(path).context("Failed to load affiliate programs")?,
        None => Vec::new(),
    };

    let active = programs.iter().filter(|p| p.active).count();
    tracing::info!(total = programs.len(), active, "Affiliate programs loaded");
    if !programs.iter().any(|p| p.active && p.merchant.is_fallback()) {
        tracing::warn!("No active fallback program; unmatched merchants will be left untagged");
    }

    let state = AppState::new(programs, config.history_capacity);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
