//! cubespin HTTP front door
//!
//! Serves the JSON frame API, the browser page that animates it, and a
//! health probe. All handlers share one read-only [`VertexService`].

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use cubespin_core::VertexService;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub mod config;
pub mod error;
pub mod routes;

pub use config::Config;
pub use error::ApiError;

/// Build the router over a shared service
pub fn app(service: Arc<VertexService>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/computeVertices", get(routes::compute_vertices))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Bind and serve until ctrl-c
pub async fn run(config: Config) -> Result<()> {
    let server_name = config
        .resolve_server_name()
        .context("Failed to determine server name")?;
    let service = Arc::new(VertexService::new(server_name));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(%addr, servername = service.server_name(), "service running");

    axum::serve(listener, app(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
