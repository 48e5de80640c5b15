//! Credential sources tried by the identity resolver.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use hearth_core::result::AppResult;

use crate::assertion::AssertionSigner;
use crate::backend::{AuthBackend, decode_unverified_subject};

use super::credentials::RequestCredentials;

/// One way a request can prove who is calling.
///
/// Returning `Ok(None)` means "this source has nothing to say"; an `Err`
/// is swallowed by the resolver and treated the same way.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Attempts to resolve a user id from the given credentials.
    async fn resolve(&self, credentials: &RequestCredentials) -> AppResult<Option<Uuid>>;
}

/// Fast path: verify the `ssa` assertion cookie locally. No I/O.
pub struct AssertionSource {
    signer: Arc<AssertionSigner>,
}

impl AssertionSource {
    /// Creates the assertion source.
    pub fn new(signer: Arc<AssertionSigner>) -> Self {
        Self { signer }
    }
}

#[async_trait]
impl CredentialSource for AssertionSource {
    fn name(&self) -> &'static str {
        "assertion"
    }

    async fn resolve(&self, credentials: &RequestCredentials) -> AppResult<Option<Uuid>> {
        Ok(credentials
            .assertion
            .as_deref()
            .and_then(|token| self.signer.verify(token))
            .map(|payload| payload.user_id))
    }
}

/// Bearer token: decode the subject claim locally; fall back to the
/// backing service when the token cannot be decoded structurally.
pub struct BearerSource {
    backend: Arc<dyn AuthBackend>,
}

impl BearerSource {
    /// Creates the bearer source.
    pub fn new(backend: Arc<dyn AuthBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl CredentialSource for BearerSource {
    fn name(&self) -> &'static str {
        "bearer"
    }

    async fn resolve(&self, credentials: &RequestCredentials) -> AppResult<Option<Uuid>> {
        let Some(token) = credentials.bearer.as_deref() else {
            return Ok(None);
        };

        if let Some(user_id) = decode_unverified_subject(token) {
            return Ok(Some(user_id));
        }

        let user = self.backend.user_for_token(token).await?;
        Ok(user.map(|u| u.id))
    }
}

/// Last resort: ask the backing service to resolve whatever session
/// cookies are attached.
pub struct SessionSource {
    backend: Arc<dyn AuthBackend>,
}

impl SessionSource {
    /// Creates the session-cookie source.
    pub fn new(backend: Arc<dyn AuthBackend>) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl CredentialSource for SessionSource {
    fn name(&self) -> &'static str {
        "session-cookie"
    }

    async fn resolve(&self, credentials: &RequestCredentials) -> AppResult<Option<Uuid>> {
        if credentials.access_token.is_none() && credentials.refresh_token.is_none() {
            return Ok(None);
        }
        let user = self
            .backend
            .user_for_session(
                credentials.access_token.as_deref(),
                credentials.refresh_token.as_deref(),
            )
            .await?;
        Ok(user.map(|u| u.id))
    }
}
