//! hemolinkd — Hemolink API server
//!
//! REST backend for the blood-donation coordination service.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::net::SocketAddr;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use hemolink_api::{app, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();
    let state = AppState::new(&config).await?;
    let router = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "hemolinkd listening");

    axum::serve(listener, router).await?;
    Ok(())
}
