//! Community entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A community: the tenant/workspace entity rooted around a slug.
///
/// The owner relationship is recorded here, independently of any
/// membership row the owner may also hold. Access decisions must check
/// both facts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Community {
    /// Unique community identifier.
    pub id: Uuid,
    /// URL slug, unique across the platform.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Optional description shown on the community page.
    pub description: Option<String>,
    /// The user who owns this community.
    pub owner_id: Uuid,
    /// Whether a super-admin has disabled this community.
    pub disabled: bool,
    /// Whether this community is featured on the platform front page.
    pub featured: bool,
    /// When the community was created.
    pub created_at: DateTime<Utc>,
    /// When the community was last updated.
    pub updated_at: DateTime<Utc>,
}
