//! Membership repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hearth_core::error::{AppError, ErrorKind};
use hearth_core::result::AppResult;
use hearth_core::types::pagination::{PageRequest, PageResponse};
use hearth_entity::membership::{CommunityAccessRow, Membership, MembershipRole};

/// Repository for community roster rows.
#[derive(Debug, Clone)]
pub struct MembershipRepository {
    pool: PgPool,
}

impl MembershipRepository {
    /// Create a new membership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a roster row for a user on a community.
    pub async fn insert(
        &self,
        community_id: Uuid,
        user_id: Uuid,
        role: MembershipRole,
    ) -> AppResult<Membership> {
        sqlx::query_as::<_, Membership>(
            "INSERT INTO memberships (community_id, user_id, role) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(community_id)
        .bind(user_id)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert membership", e)
        })
    }

    /// Fetch the caller's role on a community, if a row exists.
    ///
    /// Used by the access evaluator's two-query fallback path.
    pub async fn find_role(
        &self,
        community_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<MembershipRole>> {
        sqlx::query_scalar::<_, MembershipRole>(
            "SELECT role FROM memberships WHERE community_id = $1 AND user_id = $2",
        )
        .bind(community_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find membership role", e)
        })
    }

    /// Aggregate access lookup: community ownership and the caller's
    /// roster row in a single round trip. Returns `None` when the
    /// community does not exist.
    pub async fn find_access(
        &self,
        community_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<CommunityAccessRow>> {
        sqlx::query_as::<_, CommunityAccessRow>(
            "SELECT c.owner_id, m.role \
             FROM communities c \
             LEFT JOIN memberships m \
                 ON m.community_id = c.id AND m.user_id = $2 \
             WHERE c.id = $1",
        )
        .bind(community_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to run access query", e)
        })
    }

    /// List roster rows for a community with pagination.
    pub async fn list_for_community(
        &self,
        community_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Membership>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM memberships WHERE community_id = $1")
                .bind(community_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count memberships", e)
                })?;

        let members = sqlx::query_as::<_, Membership>(
            "SELECT * FROM memberships WHERE community_id = $1 \
             ORDER BY created_at ASC LIMIT $2 OFFSET $3",
        )
        .bind(community_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list memberships", e)
        })?;

        Ok(PageResponse::new(
            members,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Change a user's role. Returns `false` when no roster row exists.
    pub async fn update_role(
        &self,
        community_id: Uuid,
        user_id: Uuid,
        role: MembershipRole,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE memberships SET role = $3, updated_at = now() \
             WHERE community_id = $1 AND user_id = $2",
        )
        .bind(community_id)
        .bind(user_id)
        .bind(role)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update membership role", e)
        })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a roster row. Returns `false` when no row existed.
    pub async fn delete(&self, community_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM memberships WHERE community_id = $1 AND user_id = $2")
                .bind(community_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete membership", e)
                })?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all roster rows.
    pub async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM memberships")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count memberships", e)
            })?;
        Ok(total as u64)
    }
}
