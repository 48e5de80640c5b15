//! Roster handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use hearth_core::types::pagination::PageResponse;
use hearth_entity::Membership;

use crate::dto::request::SetRoleRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/communities/{id}/members — request to join.
pub async fn join(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<Uuid>,
) -> Result<(StatusCode, Json<Membership>), ApiError> {
    let membership = state.membership_service.join(&auth, community_id).await?;
    Ok((StatusCode::CREATED, Json(membership)))
}

/// GET /api/communities/{id}/members
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<Membership>>, ApiError> {
    let page = state
        .membership_service
        .list_members(&auth, community_id, params.into_page_request())
        .await?;
    Ok(Json(page))
}

/// PUT /api/communities/{id}/members/{user_id}
pub async fn set_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((community_id, user_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<SetRoleRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .membership_service
        .set_role(&auth, community_id, user_id, req.role)
        .await?;
    Ok(Json(MessageResponse {
        message: "Role updated".to_string(),
    }))
}

/// DELETE /api/communities/{id}/members/{user_id}
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((community_id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state
        .membership_service
        .remove(&auth, community_id, user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
