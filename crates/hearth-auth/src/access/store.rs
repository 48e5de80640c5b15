//! Storage seam for the access evaluator.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use hearth_core::result::AppResult;
use hearth_database::repositories::{CommunityRepository, MembershipRepository};
use hearth_entity::{CommunityAccessRow, MembershipRole};

/// The ownership and membership facts the evaluator reads.
///
/// Separated from the repositories so the evaluator can be exercised
/// against an in-memory store in tests.
#[async_trait]
pub trait AccessStore: Send + Sync {
    /// Fetches ownership and the caller's role in one round trip.
    /// `Ok(None)` means the community does not exist.
    async fn find_access(
        &self,
        community_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<CommunityAccessRow>>;

    /// Fetches the community owner, if the community exists.
    async fn find_owner_id(&self, community_id: Uuid) -> AppResult<Option<Uuid>>;

    /// Fetches the caller's membership role, if any row exists.
    async fn find_role(
        &self,
        community_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<MembershipRole>>;
}

/// `AccessStore` backed by the community and membership repositories.
#[derive(Debug, Clone)]
pub struct RepositoryAccessStore {
    communities: Arc<CommunityRepository>,
    memberships: Arc<MembershipRepository>,
}

impl RepositoryAccessStore {
    /// Creates a store over the two repositories.
    pub fn new(
        communities: Arc<CommunityRepository>,
        memberships: Arc<MembershipRepository>,
    ) -> Self {
        Self {
            communities,
            memberships,
        }
    }
}

#[async_trait]
impl AccessStore for RepositoryAccessStore {
    async fn find_access(
        &self,
        community_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<CommunityAccessRow>> {
        self.memberships.find_access(community_id, user_id).await
    }

    async fn find_owner_id(&self, community_id: Uuid) -> AppResult<Option<Uuid>> {
        self.communities.find_owner_id(community_id).await
    }

    async fn find_role(
        &self,
        community_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<MembershipRole>> {
        self.memberships.find_role(community_id, user_id).await
    }
}
