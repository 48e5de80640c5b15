//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/health/detailed
pub async fn health_detailed(State(state): State<AppState>) -> Json<DetailedHealthResponse> {
    let database_up = sqlx::query("SELECT 1")
        .execute(&state.db_pool)
        .await
        .is_ok();

    Json(DetailedHealthResponse {
        status: if database_up { "ok" } else { "degraded" }.to_string(),
        database: if database_up {
            "connected"
        } else {
            "unavailable"
        }
        .to_string(),
    })
}
