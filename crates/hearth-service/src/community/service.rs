//! Community CRUD service.

use std::fmt;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use hearth_auth::AccessEvaluator;
use hearth_core::error::AppError;
use hearth_core::result::AppResult;
use hearth_core::types::pagination::{PageRequest, PageResponse};
use hearth_database::repositories::CreateCommunity;
use hearth_entity::{Community, MembershipRole};

use crate::context::RequestContext;
use crate::store::{CommunityStore, MembershipStore};

/// Request to create a community.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateCommunityRequest {
    /// URL slug. Validated at the API boundary.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Request to update community settings. `None` fields are left as-is.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateCommunityRequest {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}

/// Manages community creation, lookup, and settings.
#[derive(Clone)]
pub struct CommunityService {
    /// Community store.
    communities: Arc<dyn CommunityStore>,
    /// Membership store, for the owner's roster row.
    memberships: Arc<dyn MembershipStore>,
    /// Access evaluator for manage-gated operations.
    access: Arc<AccessEvaluator>,
}

impl fmt::Debug for CommunityService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommunityService").finish_non_exhaustive()
    }
}

impl CommunityService {
    /// Creates a new community service.
    pub fn new(
        communities: Arc<dyn CommunityStore>,
        memberships: Arc<dyn MembershipStore>,
        access: Arc<AccessEvaluator>,
    ) -> Self {
        Self {
            communities,
            memberships,
            access,
        }
    }

    /// Creates a community owned by the caller.
    ///
    /// The owner also receives an `owner` roster row so member listings
    /// include them.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateCommunityRequest,
    ) -> AppResult<Community> {
        if self.communities.find_by_slug(&req.slug).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Slug '{}' is already taken",
                req.slug
            )));
        }

        let community = self
            .communities
            .create(&CreateCommunity {
                slug: req.slug,
                name: req.name,
                description: req.description,
                owner_id: ctx.user_id,
            })
            .await?;

        self.memberships
            .insert(community.id, ctx.user_id, MembershipRole::Owner)
            .await?;

        info!(community_id = %community.id, slug = %community.slug, "community created");
        Ok(community)
    }

    /// Looks up a community by slug.
    ///
    /// Disabled communities are visible only to callers who can manage
    /// them; everyone else gets the same not-found as a missing slug.
    pub async fn get_by_slug(
        &self,
        ctx: Option<&RequestContext>,
        slug: &str,
    ) -> AppResult<Community> {
        let community = self
            .communities
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Community not found"))?;

        if community.disabled {
            let can_see = match ctx {
                Some(ctx) => {
                    self.access
                        .get_access(community.id, ctx.user_id, ctx.super_admin)
                        .await
                        .can_manage
                }
                None => false,
            };
            if !can_see {
                return Err(AppError::not_found("Community not found"));
            }
        }

        Ok(community)
    }

    /// Updates name/description. Requires manage rights.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        community_id: Uuid,
        req: UpdateCommunityRequest,
    ) -> AppResult<Community> {
        let decision = self
            .access
            .get_access(community_id, ctx.user_id, ctx.super_admin)
            .await;
        if !decision.can_manage {
            return Err(AppError::authorization(
                "Only community managers may change settings",
            ));
        }

        self.communities
            .update_settings(community_id, req.name.as_deref(), req.description.as_deref())
            .await?
            .ok_or_else(|| AppError::not_found("Community not found"))
    }

    /// Lists featured communities for the public landing page.
    pub async fn list_featured(&self, page: PageRequest) -> AppResult<PageResponse<Community>> {
        self.communities.list_featured(&page).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hearth_core::error::ErrorKind;

    use crate::testutil::{FakeCommunities, FakeMemberships, community, ctx, evaluator};

    fn create_request(slug: &str) -> CreateCommunityRequest {
        CreateCommunityRequest {
            slug: slug.to_string(),
            name: "Rust Users".to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn creating_a_community_seeds_the_owner_roster_row() {
        let memberships = Arc::new(FakeMemberships::default());
        let service = CommunityService::new(
            Arc::new(FakeCommunities::default()),
            memberships.clone(),
            evaluator(Uuid::new_v4(), &[]),
        );
        let creator = Uuid::new_v4();

        let created = service
            .create(&ctx(creator), create_request("rust-users"))
            .await
            .unwrap();
        assert_eq!(created.owner_id, creator);
        assert_eq!(
            memberships.role(created.id, creator),
            Some(MembershipRole::Owner)
        );
    }

    #[tokio::test]
    async fn duplicate_slugs_conflict() {
        let service = CommunityService::new(
            Arc::new(FakeCommunities::default()),
            Arc::new(FakeMemberships::default()),
            evaluator(Uuid::new_v4(), &[]),
        );

        service
            .create(&ctx(Uuid::new_v4()), create_request("rust-users"))
            .await
            .unwrap();
        let err = service
            .create(&ctx(Uuid::new_v4()), create_request("rust-users"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn disabled_communities_are_hidden_from_outsiders() {
        let community_id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let service = CommunityService::new(
            Arc::new(FakeCommunities::with(vec![community(
                community_id,
                owner,
                true,
            )])),
            Arc::new(FakeMemberships::default()),
            evaluator(owner, &[]),
        );

        let err = service.get_by_slug(None, "demo").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let outsider = ctx(Uuid::new_v4());
        let err = service.get_by_slug(Some(&outsider), "demo").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn disabled_communities_stay_visible_to_their_manager() {
        let community_id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let service = CommunityService::new(
            Arc::new(FakeCommunities::with(vec![community(
                community_id,
                owner,
                true,
            )])),
            Arc::new(FakeMemberships::default()),
            evaluator(owner, &[(owner, MembershipRole::Owner)]),
        );

        let owner_ctx = ctx(owner);
        let found = service.get_by_slug(Some(&owner_ctx), "demo").await.unwrap();
        assert_eq!(found.id, community_id);
    }

    #[tokio::test]
    async fn settings_updates_require_manage_rights() {
        let community_id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let service = CommunityService::new(
            Arc::new(FakeCommunities::with(vec![community(
                community_id,
                owner,
                false,
            )])),
            Arc::new(FakeMemberships::default()),
            evaluator(owner, &[]),
        );

        let req = UpdateCommunityRequest {
            name: Some("Renamed".to_string()),
            description: None,
        };
        let err = service
            .update(&ctx(Uuid::new_v4()), community_id, req.clone())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);

        let updated = service.update(&ctx(owner), community_id, req).await.unwrap();
        assert_eq!(updated.name, "Renamed");
    }
}
