//! Feed handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use hearth_core::types::pagination::PageResponse;
use hearth_entity::Post;

use crate::dto::request::{CreatePostRequest, validate};
use crate::error::ApiError;
use crate::extractors::{AuthUser, MaybeAuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/communities/{id}/posts
///
/// Best-effort: non-members, anonymous callers, and storage failures
/// all produce 403 with an empty page, so the feed surface never leaks
/// whether a community has content.
pub async fn list(
    State(state): State<AppState>,
    MaybeAuthUser(ctx): MaybeAuthUser,
    Path(community_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> (StatusCode, Json<PageResponse<Post>>) {
    let page = params.into_page_request();
    match state
        .post_service
        .list(ctx.as_ref(), community_id, page.clone())
        .await
    {
        Ok(Some(feed)) => (StatusCode::OK, Json(feed)),
        Ok(None) => (StatusCode::FORBIDDEN, Json(PageResponse::empty(&page))),
        Err(error) => {
            tracing::warn!(%community_id, %error, "feed listing failed, returning empty page");
            (StatusCode::FORBIDDEN, Json(PageResponse::empty(&page)))
        }
    }
}

/// POST /api/communities/{id}/posts
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(community_id): Path<Uuid>,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    validate(&req)?;
    let post = state
        .post_service
        .create(&auth, community_id, &req.body)
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.post_service.delete(&auth, post_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
