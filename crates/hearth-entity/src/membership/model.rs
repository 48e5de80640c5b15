//! Membership entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::MembershipRole;

/// A user's roster row on one community.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Membership {
    /// Unique membership identifier.
    pub id: Uuid,
    /// The community this row belongs to.
    pub community_id: Uuid,
    /// The user this row belongs to.
    pub user_id: Uuid,
    /// The user's role on this community.
    pub role: MembershipRole,
    /// When the row was created (join request time for pending rows).
    pub created_at: DateTime<Utc>,
    /// When the row was last updated (e.g. approval time).
    pub updated_at: DateTime<Utc>,
}

/// Result row of the aggregate access query: community ownership joined
/// with the caller's membership row in a single round trip.
#[derive(Debug, Clone, FromRow)]
pub struct CommunityAccessRow {
    /// The community's recorded owner.
    pub owner_id: Uuid,
    /// The caller's roster role, if a row exists.
    pub role: Option<MembershipRole>,
}
