//! HTTP client for the backing auth service.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hearth_core::config::backend::BackendConfig;
use hearth_core::error::AppError;
use hearth_core::result::AppResult;

/// Identity reported by the backing auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendUser {
    /// The user id the backing service issued.
    pub id: Uuid,
    /// Email address, if reported.
    pub email: Option<String>,
}

/// Resolves identities against the external identity/session provider.
///
/// Abstracted behind a trait so handlers and the identity resolver can be
/// exercised with a fake backend in tests.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Asks the backing service which user an access token belongs to.
    ///
    /// Returns `Ok(None)` when the service rejects the token as invalid
    /// or expired; `Err` only for transport or protocol failures.
    async fn user_for_token(&self, access_token: &str) -> AppResult<Option<BackendUser>>;

    /// Resolves identity from the backing-service session cookies
    /// attached to a request.
    async fn user_for_session(
        &self,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> AppResult<Option<BackendUser>>;
}

/// `AuthBackend` implementation speaking the backing service's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpAuthBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpAuthBackend {
    /// Creates a client from backend configuration.
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::external_service(format!("Failed to build backend client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn user_for_token(&self, access_token: &str) -> AppResult<Option<BackendUser>> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(access_token)
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(format!("Backend user lookup failed: {e}"))
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Backend user lookup returned status {status}"
            )));
        }

        let user = response.json::<BackendUser>().await.map_err(|e| {
            AppError::external_service(format!("Backend user response malformed: {e}"))
        })?;
        Ok(Some(user))
    }

    async fn user_for_session(
        &self,
        access_token: Option<&str>,
        _refresh_token: Option<&str>,
    ) -> AppResult<Option<BackendUser>> {
        // The refresh flow belongs to the client's token-sync cycle; the
        // server only validates the access token it was handed.
        match access_token {
            Some(token) => self.user_for_token(token).await,
            None => Ok(None),
        }
    }
}
