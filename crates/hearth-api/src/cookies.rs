//! Session cookie names and builders.
//!
//! All cookies are scoped to `/` with `SameSite=Lax`. Everything except
//! the super-admin marker is `HttpOnly`; the marker exists so the
//! frontend can decide whether to render admin navigation, and grants
//! nothing by itself.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use hearth_core::config::auth::AuthConfig;

/// HMAC session assertion.
pub const ASSERTION_COOKIE: &str = "ssa";
/// Client-visible super-admin marker. Advisory only.
pub const SUPER_ADMIN_COOKIE: &str = "is-super-admin";
/// Backing-service access token.
pub const ACCESS_COOKIE: &str = "sb-access-token";
/// Backing-service refresh token.
pub const REFRESH_COOKIE: &str = "sb-refresh-token";

fn base(name: &'static str, value: String, config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(config.secure_cookies)
        .build()
}

/// The `ssa` assertion cookie, expiring with the assertion itself.
pub fn assertion_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    let mut cookie = base(ASSERTION_COOKIE, token, config);
    cookie.set_http_only(true);
    cookie.set_max_age(Duration::seconds(config.assertion_ttl_seconds as i64));
    cookie
}

/// The backing-service access-token cookie.
pub fn access_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    let mut cookie = base(ACCESS_COOKIE, token, config);
    cookie.set_http_only(true);
    cookie.set_max_age(Duration::seconds(config.access_cookie_ttl_seconds as i64));
    cookie
}

/// The backing-service refresh-token cookie.
pub fn refresh_cookie(config: &AuthConfig, token: String) -> Cookie<'static> {
    let mut cookie = base(REFRESH_COOKIE, token, config);
    cookie.set_http_only(true);
    cookie.set_max_age(Duration::seconds(config.refresh_cookie_ttl_seconds as i64));
    cookie
}

/// The super-admin marker. Deliberately not `HttpOnly`.
pub fn super_admin_cookie(config: &AuthConfig) -> Cookie<'static> {
    let mut cookie = base(SUPER_ADMIN_COOKIE, "1".to_string(), config);
    cookie.set_max_age(Duration::seconds(config.assertion_ttl_seconds as i64));
    cookie
}

/// An immediately-expiring replacement used to clear a cookie.
pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build((name, "")).path("/").build();
    cookie.set_max_age(Duration::ZERO);
    cookie
}

/// All cookie names this service sets, for sign-out.
pub const ALL_COOKIES: [&str; 4] = [
    ASSERTION_COOKIE,
    SUPER_ADMIN_COOKIE,
    ACCESS_COOKIE,
    REFRESH_COOKIE,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig {
            assertion_secret: "secret".to_string(),
            assertion_ttl_seconds: 1800,
            access_cookie_ttl_seconds: 3600,
            refresh_cookie_ttl_seconds: 5_184_000,
            super_admin_user_id: None,
            secure_cookies: true,
        }
    }

    #[test]
    fn assertion_cookie_is_http_only_and_time_boxed() {
        let cookie = assertion_cookie(&config(), "token".to_string());
        assert_eq!(cookie.name(), "ssa");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(1800)));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn super_admin_marker_is_readable_by_scripts() {
        let cookie = super_admin_cookie(&config());
        assert_ne!(cookie.http_only(), Some(true));
        assert_eq!(cookie.value(), "1");
    }

    #[test]
    fn removal_cookie_expires_immediately() {
        let cookie = removal_cookie(ASSERTION_COOKIE);
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.value(), "");
    }
}
