//! `AuthUser` extractor — collects request credentials, resolves an
//! identity, and injects context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use hearth_auth::identity::RequestCredentials;
use hearth_core::error::AppError;
use hearth_service::context::RequestContext;

use crate::cookies::{ACCESS_COOKIE, ASSERTION_COOKIE, REFRESH_COOKIE};
use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Rejects with 401 when no credential source yields an identity.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Like [`AuthUser`], but never rejects: anonymous requests yield `None`.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<RequestContext>);

/// Pulls every recognized credential out of the request once.
fn credentials_from_parts(parts: &Parts) -> RequestCredentials {
    let jar = CookieJar::from_headers(&parts.headers);

    let bearer = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from);

    RequestCredentials {
        assertion: jar.get(ASSERTION_COOKIE).map(|c| c.value().to_string()),
        bearer,
        access_token: jar.get(ACCESS_COOKIE).map(|c| c.value().to_string()),
        refresh_token: jar.get(REFRESH_COOKIE).map(|c| c.value().to_string()),
    }
}

async fn resolve_context(parts: &Parts, state: &AppState) -> Option<RequestContext> {
    let credentials = credentials_from_parts(parts);
    let user_id = state.identity_resolver.resolve(&credentials).await?;

    let ip_address = parts
        .headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let user_agent = parts
        .headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    Some(RequestContext {
        user_id,
        super_admin: state.config.auth.is_super_admin(user_id),
        ip_address,
        user_agent,
        request_time: Utc::now(),
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match resolve_context(parts, state).await {
            Some(ctx) => Ok(AuthUser(ctx)),
            None => Err(AppError::authentication("Authentication required").into()),
        }
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(resolve_context(parts, state).await))
    }
}
