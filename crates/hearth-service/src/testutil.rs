//! Shared in-memory fixtures for the service test modules.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use hearth_auth::{AccessEvaluator, AccessStore};
use hearth_core::result::AppResult;
use hearth_core::types::pagination::{PageRequest, PageResponse};
use hearth_database::repositories::CreateCommunity;
use hearth_entity::{Community, CommunityAccessRow, Membership, MembershipRole, Post};

use crate::context::RequestContext;
use crate::store::{CommunityStore, MembershipStore, PostStore};

/// Fixed ownership and roster facts for the access evaluator.
pub struct StaticAccess {
    pub owner_id: Option<Uuid>,
    pub roles: HashMap<Uuid, MembershipRole>,
}

#[async_trait]
impl AccessStore for StaticAccess {
    async fn find_access(
        &self,
        _community_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<CommunityAccessRow>> {
        Ok(self.owner_id.map(|owner_id| CommunityAccessRow {
            owner_id,
            role: self.roles.get(&user_id).copied(),
        }))
    }

    async fn find_owner_id(&self, _community_id: Uuid) -> AppResult<Option<Uuid>> {
        Ok(self.owner_id)
    }

    async fn find_role(
        &self,
        _community_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<MembershipRole>> {
        Ok(self.roles.get(&user_id).copied())
    }
}

/// Evaluator over a fixed owner and roster.
pub fn evaluator(owner_id: Uuid, roles: &[(Uuid, MembershipRole)]) -> Arc<AccessEvaluator> {
    Arc::new(AccessEvaluator::new(Arc::new(StaticAccess {
        owner_id: Some(owner_id),
        roles: roles.iter().copied().collect(),
    })))
}

pub fn ctx(user_id: Uuid) -> RequestContext {
    RequestContext::new(user_id, false)
}

pub fn community(id: Uuid, owner_id: Uuid, disabled: bool) -> Community {
    Community {
        id,
        slug: "demo".to_string(),
        name: "Demo".to_string(),
        description: None,
        owner_id,
        disabled,
        featured: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn membership(community_id: Uuid, user_id: Uuid, role: MembershipRole) -> Membership {
    Membership {
        id: Uuid::new_v4(),
        community_id,
        user_id,
        role,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn post(id: Uuid, community_id: Uuid, author_id: Uuid) -> Post {
    Post {
        id,
        community_id,
        author_id,
        body: "hello".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// In-memory community store.
#[derive(Default)]
pub struct FakeCommunities {
    rows: Mutex<HashMap<Uuid, Community>>,
}

impl FakeCommunities {
    pub fn with(communities: Vec<Community>) -> Self {
        Self {
            rows: Mutex::new(communities.into_iter().map(|c| (c.id, c)).collect()),
        }
    }
}

#[async_trait]
impl CommunityStore for FakeCommunities {
    async fn create(&self, data: &CreateCommunity) -> AppResult<Community> {
        let row = Community {
            id: Uuid::new_v4(),
            slug: data.slug.clone(),
            name: data.name.clone(),
            description: data.description.clone(),
            owner_id: data.owner_id,
            disabled: false,
            featured: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.rows.lock().unwrap().insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Community>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Community>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn update_settings(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Option<Community>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|c| {
            if let Some(name) = name {
                c.name = name.to_string();
            }
            if let Some(description) = description {
                c.description = Some(description.to_string());
            }
            c.clone()
        }))
    }

    async fn list_featured(&self, page: &PageRequest) -> AppResult<PageResponse<Community>> {
        let items: Vec<Community> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.featured && !c.disabled)
            .cloned()
            .collect();
        let total = items.len() as u64;
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }
}

/// In-memory membership store keyed by (community, user).
#[derive(Default)]
pub struct FakeMemberships {
    rows: Mutex<HashMap<(Uuid, Uuid), MembershipRole>>,
}

impl FakeMemberships {
    pub fn with(rows: &[(Uuid, Uuid, MembershipRole)]) -> Self {
        Self {
            rows: Mutex::new(rows.iter().map(|&(c, u, r)| ((c, u), r)).collect()),
        }
    }

    /// The stored role, for assertions.
    pub fn role(&self, community_id: Uuid, user_id: Uuid) -> Option<MembershipRole> {
        self.rows.lock().unwrap().get(&(community_id, user_id)).copied()
    }
}

#[async_trait]
impl MembershipStore for FakeMemberships {
    async fn insert(
        &self,
        community_id: Uuid,
        user_id: Uuid,
        role: MembershipRole,
    ) -> AppResult<Membership> {
        self.rows
            .lock()
            .unwrap()
            .insert((community_id, user_id), role);
        Ok(membership(community_id, user_id, role))
    }

    async fn find_role(
        &self,
        community_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Option<MembershipRole>> {
        Ok(self.role(community_id, user_id))
    }

    async fn list_for_community(
        &self,
        community_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Membership>> {
        let items: Vec<Membership> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|((c, _), _)| *c == community_id)
            .map(|(&(c, u), &r)| membership(c, u, r))
            .collect();
        let total = items.len() as u64;
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn update_role(
        &self,
        community_id: Uuid,
        user_id: Uuid,
        role: MembershipRole,
    ) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&(community_id, user_id)) {
            Some(existing) => {
                *existing = role;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, community_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .remove(&(community_id, user_id))
            .is_some())
    }
}

/// In-memory post store.
#[derive(Default)]
pub struct FakePosts {
    rows: Mutex<HashMap<Uuid, Post>>,
}

impl FakePosts {
    pub fn with(posts: Vec<Post>) -> Self {
        Self {
            rows: Mutex::new(posts.into_iter().map(|p| (p.id, p)).collect()),
        }
    }

    /// Whether a post still exists, for assertions.
    pub fn contains(&self, id: Uuid) -> bool {
        self.rows.lock().unwrap().contains_key(&id)
    }
}

#[async_trait]
impl PostStore for FakePosts {
    async fn create(&self, community_id: Uuid, author_id: Uuid, body: &str) -> AppResult<Post> {
        let row = Post {
            id: Uuid::new_v4(),
            community_id,
            author_id,
            body: body.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.rows.lock().unwrap().insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list_for_community(
        &self,
        community_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Post>> {
        let items: Vec<Post> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.community_id == community_id)
            .cloned()
            .collect();
        let total = items.len() as u64;
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}
