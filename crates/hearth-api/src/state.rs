//! Application state shared across all handlers and middleware.

use std::fmt;
use std::sync::Arc;

use sqlx::PgPool;

use hearth_auth::access::{AccessEvaluator, RepositoryAccessStore};
use hearth_auth::assertion::AssertionSigner;
use hearth_auth::backend::AuthBackend;
use hearth_auth::identity::IdentityResolver;
use hearth_core::config::AppConfig;
use hearth_core::result::AppResult;
use hearth_database::repositories::{
    CommunityRepository, MembershipRepository, PostRepository, UserRepository,
};
use hearth_service::admin::AdminService;
use hearth_service::community::CommunityService;
use hearth_service::membership::MembershipService;
use hearth_service::post::PostService;
use hearth_service::store::{CommunityStore, MembershipStore, PostStore};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// Session assertion issuer/verifier.
    pub assertion_signer: Arc<AssertionSigner>,
    /// Backing auth service client.
    pub auth_backend: Arc<dyn AuthBackend>,
    /// Per-request identity resolver.
    pub identity_resolver: Arc<IdentityResolver>,
    /// Community access evaluator.
    pub access_evaluator: Arc<AccessEvaluator>,

    /// User mirror repository, for the token-sync upsert.
    pub user_repo: Arc<UserRepository>,

    /// Community service.
    pub community_service: Arc<CommunityService>,
    /// Membership service.
    pub membership_service: Arc<MembershipService>,
    /// Post service.
    pub post_service: Arc<PostService>,
    /// Admin service.
    pub admin_service: Arc<AdminService>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    /// Wires repositories, auth components, and services over the given
    /// pool and backend.
    pub fn build(
        config: AppConfig,
        db_pool: PgPool,
        auth_backend: Arc<dyn AuthBackend>,
    ) -> AppResult<Self> {
        let assertion_signer = Arc::new(AssertionSigner::from_config(&config.auth)?);
        let identity_resolver = Arc::new(IdentityResolver::new(
            Arc::clone(&assertion_signer),
            Arc::clone(&auth_backend),
        ));

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let community_repo = Arc::new(CommunityRepository::new(db_pool.clone()));
        let membership_repo = Arc::new(MembershipRepository::new(db_pool.clone()));
        let post_repo = Arc::new(PostRepository::new(db_pool.clone()));

        let access_evaluator = Arc::new(AccessEvaluator::new(Arc::new(
            RepositoryAccessStore::new(Arc::clone(&community_repo), Arc::clone(&membership_repo)),
        )));

        let community_service = Arc::new(CommunityService::new(
            Arc::clone(&community_repo) as Arc<dyn CommunityStore>,
            Arc::clone(&membership_repo) as Arc<dyn MembershipStore>,
            Arc::clone(&access_evaluator),
        ));
        let membership_service = Arc::new(MembershipService::new(
            Arc::clone(&membership_repo) as Arc<dyn MembershipStore>,
            Arc::clone(&community_repo) as Arc<dyn CommunityStore>,
            Arc::clone(&access_evaluator),
        ));
        let post_service = Arc::new(PostService::new(
            Arc::clone(&post_repo) as Arc<dyn PostStore>,
            Arc::clone(&access_evaluator),
        ));
        let admin_service = Arc::new(AdminService::new(
            Arc::clone(&user_repo),
            Arc::clone(&community_repo),
            Arc::clone(&membership_repo),
            Arc::clone(&post_repo),
        ));

        Ok(Self {
            config: Arc::new(config),
            db_pool,
            assertion_signer,
            auth_backend,
            identity_resolver,
            access_evaluator,
            user_repo,
            community_service,
            membership_service,
            post_service,
            admin_service,
        })
    }
}
