use std::future::IntoFuture;
use std::sync::Arc;

use anyhow::{Context, Result};
use lb_probe_core::Config;
use lb_probe_http::{create_router, AppState};
use lb_probe_storage::PgStore;
use tokio::net::TcpListener;
use tracing::info;

pub(crate) async fn run(config: Config, host: String, port: u16) -> Result<()> {
    config.log_effective();

    let store = PgStore::connect(&config).context("failed to configure database pool")?;
    let state = Arc::new(AppState {
        store: store.clone(),
        server_id: config.server_id.clone(),
    });
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, server_id = %config.server_id, "HTTP server listening");

    // Listen first, initialize after: /health answers the load balancer
    // even when the database is slow or down, and failure here is non-fatal.
    if let Err(e) = store.init_schema().await {
        tracing::warn!(error = %e, "schema initialization failed, continuing without it");
    }

    // In-flight requests are intentionally not awaited on shutdown; the
    // balancer is expected to have drained this instance already.
    tokio::select! {
        result = axum::serve(listener, router).into_future() => {
            result.context("HTTP server error")?;
        },
        () = shutdown_signal() => {},
    }

    store.close().await;
    info!("database pool closed, exiting");
    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("received Ctrl+C, shutting down");
        },
        () = terminate => {
            info!("received SIGTERM, shutting down");
        },
    }
}
