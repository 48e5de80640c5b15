//! User entity model.
//!
//! Authentication is delegated to the backing auth service; this table
//! mirrors its user ids so that moderation state (suspension) can be
//! attached locally. Rows are upserted at token-sync time and may lag
//! behind the backing service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A platform user mirrored from the backing auth service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier (issued by the backing auth service).
    pub id: Uuid,
    /// Email address, if the backing service reported one.
    pub email: Option<String>,
    /// Whether a super-admin has suspended this user.
    pub suspended: bool,
    /// When the mirror row was created.
    pub created_at: DateTime<Utc>,
    /// When the mirror row was last updated.
    pub updated_at: DateTime<Utc>,
}
