//! Server setup and lifecycle management

use crate::api::{create_router, AppState};
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use crate::storage::{InMemoryTelemetry, TelemetryStorage};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Telemetry daemon server
pub struct Server {
    config: DaemonConfig,
    storage: Arc<dyn TelemetryStorage>,
}

impl Server {
    /// Create a new server with the given configuration
    pub fn new(config: DaemonConfig) -> Self {
        Self {
            config,
            storage: Arc::new(InMemoryTelemetry::new()),
        }
    }

    /// Run the server until ctrl-c or SIGTERM
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;

        let state = AppState::new(self.storage.clone());
        let app = create_router(state, &self.config.server)?;

        let listener = TcpListener::bind(addr).await?;

        tracing::info!("twin daemon listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("twin daemon shutting down");

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
