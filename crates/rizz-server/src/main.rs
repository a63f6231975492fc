use std::sync::Arc;

use clap::Parser;
use rizz_core::AppState;
use rizz_server::cli::Cli;
use rizz_server::telemetry::{LogFormat, init_tracing};
use tokio::signal;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_tracing(LogFormat::from_config(&config.server.log_format));

    let state = Arc::new(AppState::new(config)?);

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            return;
        }
        tracing::info!("Shutdown requested");
        shutdown.cancel();
    });

    rizz_server::serve(state, cancel).await
}
