use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tbm_live_server::routes::create_router;
use tbm_live_server::{Shell, ShellConfig, logger};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ShellConfig::parse();
    logger::init_logger(config.log_level()).context("failed to install the tracing subscriber")?;

    let shell = Arc::new(Shell::from_config(&config));
    let app = create_router(shell, &config.assets_dir);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("dashboard started: http://{}", listener.local_addr()?);
    info!("data directory: {}", config.data_dir.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server stopped unexpectedly")?;

    info!("dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
}
