use gateway::config::GatewayConfig;
use gateway::lifecycle::{setup_tracing, GatewaySystem};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = GatewayConfig::from_env()
        .inspect_err(|e| error!(error = %e, "Invalid configuration"))?;

    let system = GatewaySystem::start(&config);
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Gateway listening");

    axum::serve(listener, system.router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
        Err(error) => warn!(%error, "Failed to listen for Ctrl+C, shutting down"),
    }
}
