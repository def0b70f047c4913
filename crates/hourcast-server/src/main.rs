use anyhow::{Context, Result};
use hourcast_core::Config;
use hourcast_server::{create_router, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    hourcast_core::init()?;

    let (config, _) = Config::load_validated()?;
    let state = AppState::from_config(&config).context("Failed to set up forecast sources")?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.server.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind_address))?;
    tracing::info!("Listening on {}", config.server.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
