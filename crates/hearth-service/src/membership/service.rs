//! Roster service.

use std::fmt;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use hearth_auth::AccessEvaluator;
use hearth_core::error::AppError;
use hearth_core::result::AppResult;
use hearth_core::types::pagination::{PageRequest, PageResponse};
use hearth_entity::{Membership, MembershipRole};

use crate::context::RequestContext;
use crate::store::{CommunityStore, MembershipStore};

/// Manages community rosters.
#[derive(Clone)]
pub struct MembershipService {
    /// Membership store.
    memberships: Arc<dyn MembershipStore>,
    /// Community store, for existence and owner checks.
    communities: Arc<dyn CommunityStore>,
    /// Access evaluator for gated operations.
    access: Arc<AccessEvaluator>,
}

impl fmt::Debug for MembershipService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MembershipService").finish_non_exhaustive()
    }
}

impl MembershipService {
    /// Creates a new membership service.
    pub fn new(
        memberships: Arc<dyn MembershipStore>,
        communities: Arc<dyn CommunityStore>,
        access: Arc<AccessEvaluator>,
    ) -> Self {
        Self {
            memberships,
            communities,
            access,
        }
    }

    /// Requests to join a community. The row starts as `pending` until a
    /// manager approves it.
    pub async fn join(&self, ctx: &RequestContext, community_id: Uuid) -> AppResult<Membership> {
        let community = self
            .communities
            .find_by_id(community_id)
            .await?
            .ok_or_else(|| AppError::not_found("Community not found"))?;
        if community.disabled {
            return Err(AppError::not_found("Community not found"));
        }

        if community.owner_id == ctx.user_id {
            return Err(AppError::conflict("You already own this community"));
        }
        if self
            .memberships
            .find_role(community_id, ctx.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "You are already a member or have a pending request",
            ));
        }

        let membership = self
            .memberships
            .insert(community_id, ctx.user_id, MembershipRole::Pending)
            .await?;
        info!(%community_id, user_id = %ctx.user_id, "join requested");
        Ok(membership)
    }

    /// Lists the roster. Members and managers only.
    pub async fn list_members(
        &self,
        ctx: &RequestContext,
        community_id: Uuid,
        page: PageRequest,
    ) -> AppResult<PageResponse<Membership>> {
        let decision = self
            .access
            .get_access(community_id, ctx.user_id, ctx.super_admin)
            .await;
        if !decision.can_read() {
            return Err(AppError::authorization(
                "Only members may view the roster",
            ));
        }
        self.memberships.list_for_community(community_id, &page).await
    }

    /// Changes a user's role. Requires manage rights; the `owner` role
    /// cannot be granted or revoked here.
    pub async fn set_role(
        &self,
        ctx: &RequestContext,
        community_id: Uuid,
        target_user_id: Uuid,
        role: MembershipRole,
    ) -> AppResult<()> {
        if matches!(role, MembershipRole::Owner | MembershipRole::Pending) {
            return Err(AppError::validation(
                "Role must be 'admin' or 'member'",
            ));
        }

        let decision = self
            .access
            .get_access(community_id, ctx.user_id, ctx.super_admin)
            .await;
        if !decision.can_manage {
            return Err(AppError::authorization(
                "Only community managers may change roles",
            ));
        }

        if self
            .memberships
            .find_role(community_id, target_user_id)
            .await?
            == Some(MembershipRole::Owner)
        {
            return Err(AppError::validation("The owner's role cannot be changed"));
        }

        let updated = self
            .memberships
            .update_role(community_id, target_user_id, role)
            .await?;
        if !updated {
            return Err(AppError::not_found("Membership not found"));
        }
        info!(%community_id, %target_user_id, %role, "role changed");
        Ok(())
    }

    /// Removes a roster row. Managers may remove anyone but the owner;
    /// users may always remove themselves.
    pub async fn remove(
        &self,
        ctx: &RequestContext,
        community_id: Uuid,
        target_user_id: Uuid,
    ) -> AppResult<()> {
        if self
            .memberships
            .find_role(community_id, target_user_id)
            .await?
            == Some(MembershipRole::Owner)
        {
            return Err(AppError::validation("The owner cannot leave their community"));
        }

        if target_user_id != ctx.user_id {
            let decision = self
                .access
                .get_access(community_id, ctx.user_id, ctx.super_admin)
                .await;
            if !decision.can_manage {
                return Err(AppError::authorization(
                    "Only community managers may remove members",
                ));
            }
        }

        let removed = self.memberships.delete(community_id, target_user_id).await?;
        if !removed {
            return Err(AppError::not_found("Membership not found"));
        }
        info!(%community_id, %target_user_id, "membership removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hearth_core::error::ErrorKind;

    use crate::testutil::{FakeCommunities, FakeMemberships, community, ctx, evaluator};

    struct Roster {
        community_id: Uuid,
        owner: Uuid,
        admin: Uuid,
        member: Uuid,
        service: MembershipService,
        memberships: Arc<FakeMemberships>,
    }

    /// A community with an owner, an admin, and a plain member.
    fn roster() -> Roster {
        let community_id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let admin = Uuid::new_v4();
        let member = Uuid::new_v4();

        let memberships = Arc::new(FakeMemberships::with(&[
            (community_id, owner, MembershipRole::Owner),
            (community_id, admin, MembershipRole::Admin),
            (community_id, member, MembershipRole::Member),
        ]));
        let communities = Arc::new(FakeCommunities::with(vec![community(
            community_id,
            owner,
            false,
        )]));
        let access = evaluator(
            owner,
            &[
                (owner, MembershipRole::Owner),
                (admin, MembershipRole::Admin),
                (member, MembershipRole::Member),
            ],
        );

        Roster {
            community_id,
            owner,
            admin,
            member,
            service: MembershipService::new(memberships.clone(), communities, access),
            memberships,
        }
    }

    #[tokio::test]
    async fn join_creates_a_pending_row() {
        let r = roster();
        let newcomer = Uuid::new_v4();

        let row = r.service.join(&ctx(newcomer), r.community_id).await.unwrap();
        assert_eq!(row.role, MembershipRole::Pending);
        assert_eq!(
            r.memberships.role(r.community_id, newcomer),
            Some(MembershipRole::Pending)
        );
    }

    #[tokio::test]
    async fn joining_twice_conflicts() {
        let r = roster();

        let err = r.service.join(&ctx(r.member), r.community_id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn the_owner_cannot_join_their_own_community() {
        let r = roster();

        let err = r.service.join(&ctx(r.owner), r.community_id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn joining_a_disabled_community_looks_like_a_missing_one() {
        let community_id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let communities = Arc::new(FakeCommunities::with(vec![community(
            community_id,
            owner,
            true,
        )]));
        let service = MembershipService::new(
            Arc::new(FakeMemberships::default()),
            communities,
            evaluator(owner, &[]),
        );

        let err = service.join(&ctx(Uuid::new_v4()), community_id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn roster_is_hidden_from_non_members() {
        let r = roster();

        let err = r
            .service
            .list_members(&ctx(Uuid::new_v4()), r.community_id, PageRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[tokio::test]
    async fn set_role_only_accepts_admin_or_member() {
        let r = roster();

        for role in [MembershipRole::Owner, MembershipRole::Pending] {
            let err = r
                .service
                .set_role(&ctx(r.owner), r.community_id, r.member, role)
                .await
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
        }
    }

    #[tokio::test]
    async fn set_role_requires_manage_rights() {
        let r = roster();

        let err = r
            .service
            .set_role(&ctx(r.member), r.community_id, r.member, MembershipRole::Admin)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[tokio::test]
    async fn the_owners_role_is_immutable() {
        let r = roster();

        let err = r
            .service
            .set_role(&ctx(r.admin), r.community_id, r.owner, MembershipRole::Member)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(
            r.memberships.role(r.community_id, r.owner),
            Some(MembershipRole::Owner)
        );
    }

    #[tokio::test]
    async fn an_admin_can_promote_a_member() {
        let r = roster();

        r.service
            .set_role(&ctx(r.admin), r.community_id, r.member, MembershipRole::Admin)
            .await
            .unwrap();
        assert_eq!(
            r.memberships.role(r.community_id, r.member),
            Some(MembershipRole::Admin)
        );
    }

    #[tokio::test]
    async fn the_owner_cannot_be_removed() {
        let r = roster();

        let err = r
            .service
            .remove(&ctx(r.admin), r.community_id, r.owner)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn members_may_always_remove_themselves() {
        let r = roster();

        r.service
            .remove(&ctx(r.member), r.community_id, r.member)
            .await
            .unwrap();
        assert_eq!(r.memberships.role(r.community_id, r.member), None);
    }

    #[tokio::test]
    async fn removing_someone_else_requires_manage_rights() {
        let r = roster();

        let err = r
            .service
            .remove(&ctx(r.member), r.community_id, r.admin)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[tokio::test]
    async fn a_manager_can_remove_a_member() {
        let r = roster();

        r.service
            .remove(&ctx(r.admin), r.community_id, r.member)
            .await
            .unwrap();
        assert_eq!(r.memberships.role(r.community_id, r.member), None);
    }
}
