//! Platform-admin handlers.
//!
//! Every operation here passes through the admin service's super-admin
//! gate, which reports not-found to anyone else.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use hearth_entity::User;
use hearth_service::admin::PlatformStats;

use crate::dto::request::{DisabledRequest, FeaturedRequest, SuspensionRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// PUT /api/admin/users/{id}/suspension
pub async fn set_user_suspension(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(req): Json<SuspensionRequest>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .admin_service
        .set_user_suspended(&auth, user_id, req.suspended)
        .await?;
    Ok(Json(user))
}

/// PUT /api/admin/communities/{id}/disabled
pub async fn set_community_disabled(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<Uuid>,
    Json(req): Json<DisabledRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .admin_service
        .set_community_disabled(&auth, community_id, req.disabled)
        .await?;
    Ok(Json(MessageResponse {
        message: "Community updated".to_string(),
    }))
}

/// PUT /api/admin/communities/{id}/featured
pub async fn set_community_featured(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<Uuid>,
    Json(req): Json<FeaturedRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .admin_service
        .set_community_featured(&auth, community_id, req.featured)
        .await?;
    Ok(Json(MessageResponse {
        message: "Community updated".to_string(),
    }))
}

/// GET /api/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<PlatformStats>, ApiError> {
    let stats = state.admin_service.platform_stats(&auth).await?;
    Ok(Json(stats))
}
