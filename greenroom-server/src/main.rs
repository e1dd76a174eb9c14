use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use greenroom_server::{MemoryRegistry, RelayService, ServerConfig, app};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();

    let registry = Arc::new(MemoryRegistry::new());
    let service = RelayService::new(registry);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("Signaling relay listening on http://{}", config.bind);

    axum::serve(listener, app(service))
        .await
        .context("server error")?;

    Ok(())
}
