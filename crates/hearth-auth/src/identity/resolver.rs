//! Ordered, first-match-wins identity resolution.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::assertion::AssertionSigner;
use crate::backend::AuthBackend;

use super::credentials::RequestCredentials;
use super::source::{AssertionSource, BearerSource, CredentialSource, SessionSource};

/// Resolves a request's credentials to a user id.
///
/// Sources are tried in order; the first to yield an identity wins and
/// later sources are not consulted. A source that errors is logged and
/// skipped, so a degraded backing service never breaks assertion-based
/// logins.
pub struct IdentityResolver {
    sources: Vec<Arc<dyn CredentialSource>>,
}

impl IdentityResolver {
    /// Builds the standard resolution chain: assertion cookie, then
    /// bearer token, then backing-service session cookies.
    pub fn new(signer: Arc<AssertionSigner>, backend: Arc<dyn AuthBackend>) -> Self {
        Self {
            sources: vec![
                Arc::new(AssertionSource::new(signer)),
                Arc::new(BearerSource::new(backend.clone())),
                Arc::new(SessionSource::new(backend)),
            ],
        }
    }

    /// Builds a resolver over an explicit source list.
    pub fn with_sources(sources: Vec<Arc<dyn CredentialSource>>) -> Self {
        Self { sources }
    }

    /// Resolves the caller's user id, or `None` when no source can
    /// identify them.
    pub async fn resolve(&self, credentials: &RequestCredentials) -> Option<Uuid> {
        for source in &self.sources {
            match source.resolve(credentials).await {
                Ok(Some(user_id)) => {
                    tracing::debug!(source = source.name(), %user_id, "identity resolved");
                    return Some(user_id);
                }
                Ok(None) => {}
                Err(error) => {
                    tracing::debug!(
                        source = source.name(),
                        %error,
                        "credential source failed, trying next"
                    );
                }
            }
        }
        None
    }
}

impl fmt::Debug for IdentityResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("IdentityResolver")
            .field("sources", &names)
            .finish()
    }
}
