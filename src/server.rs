// ABOUTME: HTTP server lifecycle: bind, serve the router, and shut down on signal
// ABOUTME: Drains in-flight requests on Ctrl-C or SIGTERM before returning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::resources::ServerResources;
use crate::routes;
use axum::Router;
use fitness_coach_core::constants::routes as paths;
use fitness_coach_core::errors::{AppError, AppResult};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Fitness Coach HTTP server
pub struct FitnessCoachServer {
    resources: Arc<ServerResources>,
}

impl FitnessCoachServer {
    /// Create a server around shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// The fully layered application router
    #[must_use]
    pub fn router(&self) -> Router {
        routes::router(&self.resources)
    }

    /// Bind the configured address and serve until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> AppResult<()> {
        let addr = self.resources.config.bind_addr();
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            AppError::internal(format!("Failed to bind {addr}")).with_source(e)
        })?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails
    pub async fn serve(self, listener: TcpListener) -> AppResult<()> {
        let local_addr = listener
            .local_addr()
            .map_err(|e| AppError::internal("Listener has no local address").with_source(e))?;
        display_available_endpoints(local_addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal("HTTP server error").with_source(e))?;

        info!("Server stopped");
        Ok(())
    }
}

fn display_available_endpoints(addr: SocketAddr) {
    info!("=== Available API Endpoints ===");
    info!("   Assess:   POST http://{addr}{}", paths::ASSESS);
    info!("   History:  GET  http://{addr}{}?user_id=<id>&limit=<n>", paths::HISTORY);
    info!("   Health:   GET  http://{addr}{}", paths::HEALTH);
    info!("   Ready:    GET  http://{addr}{}", paths::READY);
    info!("=== End of Endpoint List ===");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl-C handler: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
