//! Application builder — wires state + router and runs the server.

use std::sync::Arc;

use sqlx::PgPool;

use hearth_auth::backend::{AuthBackend, HttpAuthBackend};
use hearth_core::config::AppConfig;
use hearth_core::error::AppError;
use hearth_core::result::AppResult;

use crate::router::build_router;
use crate::state::AppState;

/// Builds `AppState` over the given pool and auth backend.
///
/// Split out of [`run_server`] so integration tests can wire a fake
/// backend against the same state construction the server uses.
pub fn build_state(
    config: AppConfig,
    db_pool: PgPool,
    auth_backend: Arc<dyn AuthBackend>,
) -> AppResult<AppState> {
    AppState::build(config, db_pool, auth_backend)
}

/// Runs the Hearth server until shutdown.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> AppResult<()> {
    let auth_backend: Arc<dyn AuthBackend> = Arc::new(HttpAuthBackend::new(&config.backend)?);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, db_pool, auth_backend)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Hearth server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install Ctrl+C handler");
    }
}
