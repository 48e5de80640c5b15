//! Response body DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// GET /api/auth/me and POST /api/auth/token-sync
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// The caller's user id.
    pub user_id: Uuid,
    /// Whether the caller is the platform administrator.
    pub super_admin: bool,
}

/// Generic message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

/// GET /api/health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// GET /api/health/detailed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status: "ok" or "degraded".
    pub status: String,
    /// Database status: "connected" or "unavailable".
    pub database: String,
}
