use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use mobylabs_backend::{app, config::Config, prune_limiters_periodically, AppState, LIMITER_PRUNE_INTERVAL};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    if !config.static_dir.exists() {
        tracing::warn!(
            "Static dir {} does not exist, only the API will be served",
            config.static_dir.display()
        );
    }

    let state = Arc::new(AppState::new(&config));
    let pruner = tokio::spawn(prune_limiters_periodically(state.clone(), LIMITER_PRUNE_INTERVAL));
    let router = app(state, &config);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    pruner.abort();
    Ok(())
}
