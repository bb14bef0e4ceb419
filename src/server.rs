//! HTTP server initialization and runtime setup.
//!
//! Handles store bootstrap, serving, and graceful shutdown.

use crate::config::Config;
use crate::infrastructure::persistence::open_store;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tokio::sync::watch;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured link store (PostgreSQL pool and migrations, or memory)
/// - Application state and router
/// - Axum HTTP server
///
/// On SIGINT/SIGTERM the listener stops accepting connections and in-flight
/// requests get [`Config::shutdown_grace_seconds`] to finish. Whatever is
/// still running after that is dropped.
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = open_store(&config).await?;
    let state = AppState::new(store);

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let grace = Duration::from_secs(config.shutdown_grace_seconds);

    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    tokio::select! {
        result = server.into_future() => {
            result.context("Server error")?;
            tracing::info!("Server stopped");
        }
        _ = async {
            if shutdown_rx.changed().await.is_ok() {
                tokio::time::sleep(grace).await;
            } else {
                std::future::pending::<()>().await;
            }
        } => {
            tracing::warn!(
                "Shutdown grace period of {}s elapsed, dropping remaining connections",
                grace.as_secs()
            );
        }
    }

    Ok(())
}

/// Completes when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}
