use std::{net::SocketAddr, path::Path};

use axum::Router;
use configs::AppConfig;
use service::BlobStore;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes;

/// Shared handler state: the one store handle for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub store: BlobStore,
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    cfg.bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("{}: {e}", cfg.bind_addr())))
}

/// Open the database and make sure the record exists.
///
/// Any failure here must stop the process before it serves a request.
pub async fn init_store(cfg: &AppConfig) -> Result<BlobStore, StartupError> {
    common::env::ensure_data_dir(Path::new(&cfg.database.path)).await?;
    let store = BlobStore::open(&cfg.database).await?;
    store.ensure_initialized().await?;
    info!(path = %cfg.database.path, event = "store_ready", "blob store initialized");
    Ok(store)
}

/// Router with the standard layers for `cfg`.
pub fn build_app(cfg: &AppConfig, store: BlobStore) -> Router {
    routes::build_router(AppState { store }, build_cors(), cfg.limits.max_body_bytes)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutdown signal received, draining connections");
}

/// Public entry: initialize storage, then serve until a shutdown signal.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let store = init_store(&cfg).await?;
    let app = build_app(&cfg, store.clone());

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("bind {addr}: {e}"))?;
    info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)?;

    close_store(store).await
}

/// Release the database handle after the server has drained.
pub async fn close_store(store: BlobStore) -> Result<(), StartupError> {
    match store.close().await {
        Ok(()) => {
            info!(event = "store_closed", "database handle closed");
            Ok(())
        }
        Err(e) => {
            error!(event = "store_close_failed", error = %e, "failed to close database handle");
            Err(StartupError::Shutdown(e))
        }
    }
}
