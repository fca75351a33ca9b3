//! HTTP boundary around the diff engine.

mod http;
mod http_error;
mod state;

pub use http::{create_router, run_diff, DiffRequest, DiffResponse};
pub use state::AppState;

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use tracing::info;

/// Binds `config.addr` and serves until ctrl-c.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let app = create_router(AppState::new(config.limits));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("bind {}", config.addr))?;
    let local_addr = listener.local_addr().context("read listener local addr")?;
    info!(
        addr = %local_addr,
        max_table_cells = config.limits.max_table_cells,
        "textdiff listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("textdiff stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
