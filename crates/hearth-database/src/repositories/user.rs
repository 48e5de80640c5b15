//! User mirror repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hearth_core::error::{AppError, ErrorKind};
use hearth_core::result::AppResult;
use hearth_entity::user::User;

/// Repository for the locally mirrored user table.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Insert or refresh the mirror row for a backing-service user.
    pub async fn upsert(&self, id: Uuid, email: Option<&str>) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET \
                 email = COALESCE(EXCLUDED.email, users.email), \
                 updated_at = now() \
             RETURNING *",
        )
        .bind(id)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert user", e))
    }

    /// Set the suspension flag, creating the mirror row if the user has
    /// never synced.
    pub async fn set_suspended(&self, id: Uuid, suspended: bool) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, suspended) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET \
                 suspended = EXCLUDED.suspended, \
                 updated_at = now() \
             RETURNING *",
        )
        .bind(id)
        .bind(suspended)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to set suspension flag", e)
        })
    }

    /// Count all mirrored users.
    pub async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;
        Ok(total as u64)
    }
}
