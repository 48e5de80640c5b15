//! Community handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use hearth_auth::AccessDecision;
use hearth_core::types::pagination::PageResponse;
use hearth_entity::Community;
use hearth_service::community::{
    CreateCommunityRequest as CreateCommunityInput, UpdateCommunityRequest as UpdateCommunityInput,
};

use crate::dto::request::{CreateCommunityRequest, UpdateCommunityRequest, validate};
use crate::error::ApiError;
use crate::extractors::{AuthUser, MaybeAuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/communities
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCommunityRequest>,
) -> Result<(StatusCode, Json<Community>), ApiError> {
    validate(&req)?;
    let community = state
        .community_service
        .create(
            &auth,
            CreateCommunityInput {
                slug: req.slug,
                name: req.name,
                description: req.description,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(community)))
}

/// GET /api/communities/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    MaybeAuthUser(ctx): MaybeAuthUser,
    Path(slug): Path<String>,
) -> Result<Json<Community>, ApiError> {
    let community = state
        .community_service
        .get_by_slug(ctx.as_ref(), &slug)
        .await?;
    Ok(Json(community))
}

/// PUT /api/communities/{id}/settings
pub async fn update_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<Uuid>,
    Json(req): Json<UpdateCommunityRequest>,
) -> Result<Json<Community>, ApiError> {
    validate(&req)?;
    let community = state
        .community_service
        .update(
            &auth,
            community_id,
            UpdateCommunityInput {
                name: req.name,
                description: req.description,
            },
        )
        .await?;
    Ok(Json(community))
}

/// GET /api/communities/{id}/access
pub async fn get_access(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<Uuid>,
) -> Json<AccessDecision> {
    let decision = state
        .access_evaluator
        .get_access(community_id, auth.user_id, auth.super_admin)
        .await;
    Json(decision)
}

/// GET /api/communities/featured
pub async fn list_featured(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<Community>>, ApiError> {
    let page = state
        .community_service
        .list_featured(params.into_page_request())
        .await?;
    Ok(Json(page))
}
