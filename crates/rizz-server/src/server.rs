use std::sync::Arc;

use anyhow::Context;
use rizz_core::AppState;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::routes::create_router;

/// Serve the API until `cancel` fires, then drain in-flight requests
pub async fn serve(state: Arc<AppState>, cancel: CancellationToken) -> anyhow::Result<()> {
    let bind_addr = &state.config.server.bind_addr;
    let addr = state
        .config
        .server
        .socket_addr()
        .with_context(|| format!("invalid bind address {bind_addr:?}"))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("translation service listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await
        .context("server error")?;

    tracing::info!("translation service stopped");
    Ok(())
}
