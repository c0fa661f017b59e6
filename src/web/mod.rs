//! HTTP front-end.

pub mod error;
pub mod handlers;
pub mod page;

use crate::core::Locator;
use crate::errors::{AppError, AppResult};
use axum::{
    Router,
    routing::get,
};
use handlers::{api_lookup, health, index, submit};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(locator: Arc<Locator>) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/api/lookup", get(api_lookup))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(locator)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down.");
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(locator: Arc<Locator>, addr: &str) -> AppResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("cannot bind {addr}: {e}")))?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, router(locator))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
