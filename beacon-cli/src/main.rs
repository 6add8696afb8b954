use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use beacon_core::SessionId;
use beacon_server::{SessionRouter, SignalingService, build_router};

#[derive(Parser)]
#[command(name = "beacond")]
#[command(about = "WebRTC video signaling relay")]
struct Cli {
    /// Address to listen on. The stock control client connects to port 3001.
    #[arg(long, default_value = "0.0.0.0:3001")]
    bind: SocketAddr,

    /// Session assigned to peers that identify with a bare role string.
    #[arg(long, default_value = "default")]
    default_session: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let (relay_cmd_tx, relay_cmd_rx) = mpsc::channel(256);
    let service = SignalingService::new(relay_cmd_tx);

    let router = SessionRouter::new(
        relay_cmd_rx,
        Arc::new(service.clone()),
        SessionId::from(cli.default_session),
    );
    tokio::spawn(router.run());

    let app = build_router(service);

    info!("Signaling relay listening on http://{}", cli.bind);

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("Failed to bind {}", cli.bind))?;
    axum::serve(listener, app)
        .await
        .context("Server exited with error")?;

    Ok(())
}
