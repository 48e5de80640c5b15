//! Storage seams for the services.
//!
//! Each service depends on a narrow trait rather than the concrete
//! repository, so its access rules can be exercised against in-memory
//! stores in tests. The repositories implement the traits by
//! delegation.

use async_trait::async_trait;
use uuid::Uuid;

use hearth_core::result::AppResult;
use hearth_core::types::pagination::{PageRequest, PageResponse};
use hearth_database::repositories::{
    CommunityRepository, CreateCommunity, MembershipRepository, PostRepository,
};
use hearth_entity::{Community, Membership, MembershipRole, Post};

/// Community rows as the community service reads and writes them.
#[async_trait]
pub trait CommunityStore: Send + Sync {
    async fn create(&self, data: &CreateCommunity) -> AppResult<Community>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Community>>;

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Community>>;

    /// Returns the updated row, or `None` when the community does not
    /// exist.
    async fn update_settings(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Option<Community>>;

    async fn list_featured(&self, page: &PageRequest) -> AppResult<PageResponse<Community>>;
}

/// Roster rows as the membership service reads and writes them.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    async fn insert(
        &self,
        community_id: Uuid,
        user_id: Uuid,
        role: MembershipRole,
    ) -> AppResult<Membership>;

    async fn find_role(
        &self,
        community_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<MembershipRole>>;

    async fn list_for_community(
        &self,
        community_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Membership>>;

    /// Returns `false` when no row matched.
    async fn update_role(
        &self,
        community_id: Uuid,
        user_id: Uuid,
        role: MembershipRole,
    ) -> AppResult<bool>;

    /// Returns `false` when no row matched.
    async fn delete(&self, community_id: Uuid, user_id: Uuid) -> AppResult<bool>;
}

/// Feed rows as the post service reads and writes them.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create(&self, community_id: Uuid, author_id: Uuid, body: &str) -> AppResult<Post>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>>;

    async fn list_for_community(
        &self,
        community_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Post>>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

#[async_trait]
impl CommunityStore for CommunityRepository {
    async fn create(&self, data: &CreateCommunity) -> AppResult<Community> {
        CommunityRepository::create(self, data).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Community>> {
        CommunityRepository::find_by_id(self, id).await
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Community>> {
        CommunityRepository::find_by_slug(self, slug).await
    }

    async fn update_settings(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Option<Community>> {
        CommunityRepository::update_settings(self, id, name, description).await
    }

    async fn list_featured(&self, page: &PageRequest) -> AppResult<PageResponse<Community>> {
        CommunityRepository::list_featured(self, page).await
    }
}

#[async_trait]
impl MembershipStore for MembershipRepository {
    async fn insert(
        &self,
        community_id: Uuid,
        user_id: Uuid,
        role: MembershipRole,
    ) -> AppResult<Membership> {
        MembershipRepository::insert(self, community_id, user_id, role).await
    }

    async fn find_role(
        &self,
        community_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<MembershipRole>> {
        MembershipRepository::find_role(self, community_id, user_id).await
    }

    async fn list_for_community(
        &self,
        community_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Membership>> {
        MembershipRepository::list_for_community(self, community_id, page).await
    }

    async fn update_role(
        &self,
        community_id: Uuid,
        user_id: Uuid,
        role: MembershipRole,
    ) -> AppResult<bool> {
        MembershipRepository::update_role(self, community_id, user_id, role).await
    }

    async fn delete(&self, community_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        MembershipRepository::delete(self, community_id, user_id).await
    }
}

#[async_trait]
impl PostStore for PostRepository {
    async fn create(&self, community_id: Uuid, author_id: Uuid, body: &str) -> AppResult<Post> {
        PostRepository::create(self, community_id, author_id, body).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>> {
        PostRepository::find_by_id(self, id).await
    }

    async fn list_for_community(
        &self,
        community_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Post>> {
        PostRepository::list_for_community(self, community_id, page).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        PostRepository::delete(self, id).await
    }
}
