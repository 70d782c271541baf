//! Application builder: wires router, middleware, and state into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware as axum_middleware;
use tokio::sync::watch;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use weightlog_core::config::{AppConfig, DatabaseBackend};
use weightlog_core::error::AppError;
use weightlog_database::{DatabasePool, MemoryWeightRepository, PgWeightRepository, WeightStore};

use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;
use crate::views::HtmlRenderer;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = &state.config.server;
    let max_form_bytes = server.max_form_bytes;
    let request_timeout = Duration::from_secs(server.request_timeout_seconds);

    build_router(state)
        .layer(DefaultBodyLimit::max(max_form_bytes))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(request_logging))
}

/// Runs the server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting Weightlog v{}", env!("CARGO_PKG_VERSION"));

    let (weights, pool) = open_store(&config).await?;
    let views = Arc::new(HtmlRenderer::new(&config.views));

    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = AppState::new(Arc::new(config), weights, views);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    info!("Weightlog listening on {addr}");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
            })
            .await
    });

    let result = tokio::select! {
        finished = &mut server => Some(finished),
        _ = shutdown_signal() => None,
    };

    let result = match result {
        Some(finished) => finished,
        None => {
            info!("Shutdown signal received, draining connections...");
            let _ = shutdown_tx.send(true);
            match tokio::time::timeout(grace, &mut server).await {
                Ok(finished) => finished,
                Err(_) => {
                    warn!(
                        grace_seconds = grace.as_secs(),
                        "Connections still open after grace period"
                    );
                    server.abort();
                    Ok(Ok(()))
                }
            }
        }
    };

    if let Some(pool) = pool {
        pool.close().await;
    }

    result
        .map_err(|e| AppError::internal(format!("Server task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("Weightlog server shut down gracefully");
    Ok(())
}

/// Open the configured weight store.
///
/// The pool is returned alongside the store so it can be closed on shutdown.
async fn open_store(
    config: &AppConfig,
) -> Result<(Arc<dyn WeightStore>, Option<DatabasePool>), AppError> {
    match config.database.backend {
        DatabaseBackend::Memory => {
            warn!("Using the in-memory backend; records are lost on exit");
            Ok((Arc::new(MemoryWeightRepository::new()), None))
        }
        DatabaseBackend::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;
            if config.database.run_migrations {
                weightlog_database::migration::run_migrations(pool.pool()).await?;
            }
            let repo = PgWeightRepository::new(pool.pool().clone());
            Ok((Arc::new(repo), Some(pool)))
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {e}");
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
                error!("Failed to install SIGTERM handler: {e}");
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
}
