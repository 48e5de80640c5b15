//! Feed service.

use std::fmt;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use hearth_auth::AccessEvaluator;
use hearth_core::error::AppError;
use hearth_core::result::AppResult;
use hearth_core::types::pagination::{PageRequest, PageResponse};
use hearth_entity::Post;

use crate::context::RequestContext;
use crate::store::PostStore;

/// Manages the member-gated community feed.
#[derive(Clone)]
pub struct PostService {
    /// Post store.
    posts: Arc<dyn PostStore>,
    /// Access evaluator for the member gate.
    access: Arc<AccessEvaluator>,
}

impl fmt::Debug for PostService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostService").finish_non_exhaustive()
    }
}

impl PostService {
    /// Creates a new post service.
    pub fn new(posts: Arc<dyn PostStore>, access: Arc<AccessEvaluator>) -> Self {
        Self { posts, access }
    }

    /// Lists a community's feed, newest first.
    ///
    /// Returns `Ok(None)` when the caller may not read the feed, anonymous
    /// callers included. `Err` is reserved for storage failures on the
    /// listing itself, so the handler can degrade both cases the same way.
    pub async fn list(
        &self,
        ctx: Option<&RequestContext>,
        community_id: Uuid,
        page: PageRequest,
    ) -> AppResult<Option<PageResponse<Post>>> {
        let Some(ctx) = ctx else {
            return Ok(None);
        };

        let decision = self
            .access
            .get_access(community_id, ctx.user_id, ctx.super_admin)
            .await;
        if !decision.can_read() {
            return Ok(None);
        }

        let feed = self.posts.list_for_community(community_id, &page).await?;
        Ok(Some(feed))
    }

    /// Creates a post in a community the caller can read.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        community_id: Uuid,
        body: &str,
    ) -> AppResult<Post> {
        let body = body.trim();
        if body.is_empty() {
            return Err(AppError::validation("Post body must not be empty"));
        }

        let decision = self
            .access
            .get_access(community_id, ctx.user_id, ctx.super_admin)
            .await;
        if !decision.can_read() {
            return Err(AppError::authorization("Only members may post"));
        }

        let post = self.posts.create(community_id, ctx.user_id, body).await?;
        info!(%community_id, post_id = %post.id, "post created");
        Ok(post)
    }

    /// Deletes a post. Allowed for its author and community managers.
    pub async fn delete(&self, ctx: &RequestContext, post_id: Uuid) -> AppResult<()> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))?;

        if post.author_id != ctx.user_id {
            let decision = self
                .access
                .get_access(post.community_id, ctx.user_id, ctx.super_admin)
                .await;
            if !decision.can_manage {
                return Err(AppError::authorization(
                    "Only the author or a community manager may delete a post",
                ));
            }
        }

        self.posts.delete(post_id).await?;
        info!(%post_id, "post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hearth_core::error::ErrorKind;
    use hearth_entity::MembershipRole;

    use crate::testutil::{FakePosts, ctx, evaluator, post};

    struct Feed {
        community_id: Uuid,
        admin: Uuid,
        author: Uuid,
        post_id: Uuid,
        service: PostService,
        posts: Arc<FakePosts>,
    }

    /// One community with an admin, a member who authored a post, and
    /// that post already in the feed.
    fn feed() -> Feed {
        let community_id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let admin = Uuid::new_v4();
        let author = Uuid::new_v4();
        let post_id = Uuid::new_v4();

        let posts = Arc::new(FakePosts::with(vec![post(post_id, community_id, author)]));
        let access = evaluator(
            owner,
            &[
                (admin, MembershipRole::Admin),
                (author, MembershipRole::Member),
            ],
        );

        Feed {
            community_id,
            admin,
            author,
            post_id,
            service: PostService::new(posts.clone(), access),
            posts,
        }
    }

    #[tokio::test]
    async fn the_feed_is_withheld_from_anonymous_and_non_members() {
        let f = feed();

        let anonymous = f
            .service
            .list(None, f.community_id, PageRequest::default())
            .await
            .unwrap();
        assert!(anonymous.is_none());

        let outsider = ctx(Uuid::new_v4());
        let listing = f
            .service
            .list(Some(&outsider), f.community_id, PageRequest::default())
            .await
            .unwrap();
        assert!(listing.is_none());
    }

    #[tokio::test]
    async fn members_can_read_the_feed() {
        let f = feed();

        let member = ctx(f.author);
        let listing = f
            .service
            .list(Some(&member), f.community_id, PageRequest::default())
            .await
            .unwrap()
            .expect("members see the feed");
        assert_eq!(listing.total_items, 1);
    }

    #[tokio::test]
    async fn blank_post_bodies_are_rejected() {
        let f = feed();

        let err = f
            .service
            .create(&ctx(f.author), f.community_id, "   \n")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn non_members_may_not_post() {
        let f = feed();

        let err = f
            .service
            .create(&ctx(Uuid::new_v4()), f.community_id, "hello")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[tokio::test]
    async fn authors_can_delete_their_own_posts() {
        let f = feed();

        f.service.delete(&ctx(f.author), f.post_id).await.unwrap();
        assert!(!f.posts.contains(f.post_id));
    }

    #[tokio::test]
    async fn managers_can_delete_any_post() {
        let f = feed();

        f.service.delete(&ctx(f.admin), f.post_id).await.unwrap();
        assert!(!f.posts.contains(f.post_id));
    }

    #[tokio::test]
    async fn other_members_may_not_delete_a_post() {
        let f = feed();
        let bystander = Uuid::new_v4();

        // A plain member who is not the author.
        let access = evaluator(
            Uuid::new_v4(),
            &[(bystander, MembershipRole::Member)],
        );
        let service = PostService::new(f.posts.clone(), access);

        let err = service.delete(&ctx(bystander), f.post_id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        assert!(f.posts.contains(f.post_id));
    }
}
