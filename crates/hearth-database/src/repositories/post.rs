//! Feed post repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hearth_core::error::{AppError, ErrorKind};
use hearth_core::result::AppResult;
use hearth_core::types::pagination::{PageRequest, PageResponse};
use hearth_entity::post::Post;

/// Repository for community feed posts.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new post and return it.
    pub async fn create(
        &self,
        community_id: Uuid,
        author_id: Uuid,
        body: &str,
    ) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (community_id, author_id, body) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(community_id)
        .bind(author_id)
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create post", e))
    }

    /// Find a post by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post by id", e))
    }

    /// List a community's feed, newest first, with pagination.
    pub async fn list_for_community(
        &self,
        community_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Post>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE community_id = $1")
            .bind(community_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count posts", e))?;

        let posts = sqlx::query_as::<_, Post>(
            "SELECT * FROM posts WHERE community_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(community_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))?;

        Ok(PageResponse::new(
            posts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Delete a post. Returns `false` when no row existed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete post", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all posts.
    pub async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count posts", e))?;
        Ok(total as u64)
    }
}
