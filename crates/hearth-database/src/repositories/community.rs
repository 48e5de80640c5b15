//! Community repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hearth_core::error::{AppError, ErrorKind};
use hearth_core::result::AppResult;
use hearth_core::types::pagination::{PageRequest, PageResponse};
use hearth_entity::community::Community;

/// Data required to create a new community.
#[derive(Debug, Clone)]
pub struct CreateCommunity {
    /// URL slug (validated and unique).
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// The creating user, who becomes the owner.
    pub owner_id: Uuid,
}

/// Repository for community CRUD and query operations.
#[derive(Debug, Clone)]
pub struct CommunityRepository {
    pool: PgPool,
}

impl CommunityRepository {
    /// Create a new community repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new community and return it.
    pub async fn create(&self, data: &CreateCommunity) -> AppResult<Community> {
        sqlx::query_as::<_, Community>(
            "INSERT INTO communities (slug, name, description, owner_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.slug)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create community", e)
        })
    }

    /// Find a community by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Community>> {
        sqlx::query_as::<_, Community>("SELECT * FROM communities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find community by id", e)
            })
    }

    /// Find a community by slug (case-insensitive).
    pub async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Community>> {
        sqlx::query_as::<_, Community>("SELECT * FROM communities WHERE LOWER(slug) = LOWER($1)")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find community by slug", e)
            })
    }

    /// Fetch only the owner id of a community.
    ///
    /// Used by the access evaluator's two-query fallback path.
    pub async fn find_owner_id(&self, id: Uuid) -> AppResult<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>("SELECT owner_id FROM communities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find community owner", e)
            })
    }

    /// Update name/description settings. Returns the updated row, or
    /// `None` when the community does not exist.
    pub async fn update_settings(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Option<Community>> {
        sqlx::query_as::<_, Community>(
            "UPDATE communities SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update community", e)
        })
    }

    /// Set the disabled flag. Returns `false` when the community does not exist.
    pub async fn set_disabled(&self, id: Uuid, disabled: bool) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE communities SET disabled = $2, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .bind(disabled)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to set disabled flag", e)
        })?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the featured flag. Returns `false` when the community does not exist.
    pub async fn set_featured(&self, id: Uuid, featured: bool) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE communities SET featured = $2, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .bind(featured)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to set featured flag", e)
        })?;
        Ok(result.rows_affected() > 0)
    }

    /// List featured, non-disabled communities with pagination.
    pub async fn list_featured(&self, page: &PageRequest) -> AppResult<PageResponse<Community>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM communities WHERE featured AND NOT disabled",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count featured communities", e)
        })?;

        let communities = sqlx::query_as::<_, Community>(
            "SELECT * FROM communities WHERE featured AND NOT disabled \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list featured communities", e)
        })?;

        Ok(PageResponse::new(
            communities,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count all communities.
    pub async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM communities")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count communities", e)
            })?;
        Ok(total as u64)
    }
}
