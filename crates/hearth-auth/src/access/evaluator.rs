//! Evaluates what a user may do in a community.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use hearth_core::result::AppResult;

use super::decision::AccessDecision;
use super::store::AccessStore;

/// Computes an [`AccessDecision`] for a (user, community) pair.
///
/// The primary path reads ownership and role in a single aggregate
/// query. If that fails, the evaluator falls back to two independent
/// lookups; if those fail too, it returns a deny decision rather than
/// erroring, so a storage blip reads as "no access" instead of a 500.
pub struct AccessEvaluator {
    store: Arc<dyn AccessStore>,
}

impl AccessEvaluator {
    /// Creates an evaluator over the given store.
    pub fn new(store: Arc<dyn AccessStore>) -> Self {
        Self { store }
    }

    /// Evaluates access for `user_id` in `community_id`.
    pub async fn get_access(
        &self,
        community_id: Uuid,
        user_id: Uuid,
        super_admin: bool,
    ) -> AccessDecision {
        match self.store.find_access(community_id, user_id).await {
            Ok(Some(row)) => AccessDecision::derive(Some(row.owner_id), row.role, user_id, super_admin),
            Ok(None) => AccessDecision::derive(None, None, user_id, super_admin),
            Err(error) => {
                tracing::warn!(
                    %community_id,
                    %user_id,
                    %error,
                    "aggregate access query failed, falling back to split lookups"
                );
                self.get_access_split(community_id, user_id, super_admin)
                    .await
            }
        }
    }

    async fn get_access_split(
        &self,
        community_id: Uuid,
        user_id: Uuid,
        super_admin: bool,
    ) -> AccessDecision {
        let facts: AppResult<_> = async {
            let owner_id = self.store.find_owner_id(community_id).await?;
            let role = self.store.find_role(community_id, user_id).await?;
            Ok((owner_id, role))
        }
        .await;

        match facts {
            Ok((owner_id, role)) => AccessDecision::derive(owner_id, role, user_id, super_admin),
            Err(error) => {
                tracing::warn!(
                    %community_id,
                    %user_id,
                    %error,
                    "access lookups unavailable, denying"
                );
                AccessDecision::deny(super_admin)
            }
        }
    }
}

impl fmt::Debug for AccessEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessEvaluator").finish()
    }
}
