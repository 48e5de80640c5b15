//! Auth handlers — token sync, sign-out, me.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;

use hearth_core::error::AppError;

use crate::cookies;
use crate::dto::request::{TokenSyncRequest, validate};
use crate::dto::response::{MeResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/token-sync
///
/// Validates the backing-service access token, refreshes the local user
/// mirror, and installs the session cookie set: assertion, backing
/// tokens, and the advisory super-admin marker.
pub async fn token_sync(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<TokenSyncRequest>,
) -> Result<(CookieJar, Json<MeResponse>), ApiError> {
    validate(&req)?;

    let user = state
        .auth_backend
        .user_for_token(&req.access_token)
        .await?
        .ok_or_else(|| AppError::authentication("Access token was rejected"))?;

    let mirrored = state
        .user_repo
        .upsert(user.id, user.email.as_deref())
        .await?;
    if mirrored.suspended {
        return Err(AppError::authorization("Account is suspended").into());
    }

    let assertion = state.assertion_signer.issue(user.id)?;
    let super_admin = state.config.auth.is_super_admin(user.id);

    let auth_config = &state.config.auth;
    let mut jar = jar
        .add(cookies::assertion_cookie(auth_config, assertion))
        .add(cookies::access_cookie(auth_config, req.access_token));
    if let Some(refresh_token) = req.refresh_token {
        jar = jar.add(cookies::refresh_cookie(auth_config, refresh_token));
    }
    jar = if super_admin {
        jar.add(cookies::super_admin_cookie(auth_config))
    } else {
        jar.add(cookies::removal_cookie(cookies::SUPER_ADMIN_COOKIE))
    };

    Ok((
        jar,
        Json(MeResponse {
            user_id: user.id,
            super_admin,
        }),
    ))
}

/// POST /api/auth/signout
///
/// Clears every cookie this service sets. Requires no valid session so
/// a half-broken cookie state can always be reset.
pub async fn signout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let mut jar = jar;
    for name in cookies::ALL_COOKIES {
        jar = jar.add(cookies::removal_cookie(name));
    }
    (
        jar,
        Json(MessageResponse {
            message: "Signed out".to_string(),
        }),
    )
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        user_id: auth.user_id,
        super_admin: auth.super_admin,
    })
}
