//! Server initialization and main run loop

use super::config::AppConfig;
use super::providers::build_coordinator;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing::{info, warn};

/// Run the HTTP and WebSocket server until Ctrl+C or SIGTERM
pub async fn run(config: AppConfig) -> Result<()> {
    info!(
        "Starting WisdomArc server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let coordinator = build_coordinator(&config)?;
    if !coordinator.gateway().health_check().await {
        warn!(
            provider = coordinator.gateway().provider_name(),
            "Model backend is not reachable; requests will use fallback output until it is"
        );
    }

    let app = crate::api::app_router(coordinator);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("WisdomArc shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received SIGTERM signal");
        }
    }
}
