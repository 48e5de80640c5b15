//! Platform-admin service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use hearth_core::error::AppError;
use hearth_core::result::AppResult;
use hearth_database::repositories::{
    CommunityRepository, MembershipRepository, PostRepository, UserRepository,
};
use hearth_entity::User;

use crate::context::RequestContext;

/// Platform-wide counters for the admin dashboard.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlatformStats {
    /// Mirrored users.
    pub users: u64,
    /// Communities.
    pub communities: u64,
    /// Roster rows (pending included).
    pub memberships: u64,
    /// Feed posts.
    pub posts: u64,
}

/// Super-admin-only platform operations.
#[derive(Debug, Clone)]
pub struct AdminService {
    users: Arc<UserRepository>,
    communities: Arc<CommunityRepository>,
    memberships: Arc<MembershipRepository>,
    posts: Arc<PostRepository>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(
        users: Arc<UserRepository>,
        communities: Arc<CommunityRepository>,
        memberships: Arc<MembershipRepository>,
        posts: Arc<PostRepository>,
    ) -> Self {
        Self {
            users,
            communities,
            memberships,
            posts,
        }
    }

    /// Rejects non-super-admin callers.
    ///
    /// Returns not-found rather than forbidden so the admin surface is
    /// indistinguishable from a missing route.
    fn ensure_super(ctx: &RequestContext) -> AppResult<()> {
        if ctx.super_admin {
            Ok(())
        } else {
            Err(AppError::not_found("Not found"))
        }
    }

    /// Suspends or reinstates a user platform-wide.
    pub async fn set_user_suspended(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        suspended: bool,
    ) -> AppResult<User> {
        Self::ensure_super(ctx)?;
        let user = self.users.set_suspended(user_id, suspended).await?;
        info!(%user_id, suspended, "user suspension changed");
        Ok(user)
    }

    /// Disables or re-enables a community.
    pub async fn set_community_disabled(
        &self,
        ctx: &RequestContext,
        community_id: Uuid,
        disabled: bool,
    ) -> AppResult<()> {
        Self::ensure_super(ctx)?;
        if !self.communities.set_disabled(community_id, disabled).await? {
            return Err(AppError::not_found("Community not found"));
        }
        info!(%community_id, disabled, "community disabled flag changed");
        Ok(())
    }

    /// Features or un-features a community on the landing page.
    pub async fn set_community_featured(
        &self,
        ctx: &RequestContext,
        community_id: Uuid,
        featured: bool,
    ) -> AppResult<()> {
        Self::ensure_super(ctx)?;
        if !self.communities.set_featured(community_id, featured).await? {
            return Err(AppError::not_found("Community not found"));
        }
        info!(%community_id, featured, "community featured flag changed");
        Ok(())
    }

    /// Collects platform-wide counters.
    pub async fn platform_stats(&self, ctx: &RequestContext) -> AppResult<PlatformStats> {
        Self::ensure_super(ctx)?;
        Ok(PlatformStats {
            users: self.users.count().await?,
            communities: self.communities.count().await?,
            memberships: self.memberships.count().await?,
            posts: self.posts.count().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::error::ErrorKind;

    #[test]
    fn non_super_admin_sees_not_found() {
        let ctx = RequestContext::new(Uuid::new_v4(), false);
        let err = AdminService::ensure_super(&ctx).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn super_admin_passes_the_gate() {
        let ctx = RequestContext::new(Uuid::new_v4(), true);
        assert!(AdminService::ensure_super(&ctx).is_ok());
    }
}
