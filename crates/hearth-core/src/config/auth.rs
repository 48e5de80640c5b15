//! Session assertion and super-admin configuration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authentication configuration.
///
/// The assertion secret has no usable default: an empty secret is a
/// deployment defect and is rejected loudly when the assertion signer
/// is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session assertion signing (HMAC-SHA256).
    #[serde(default)]
    pub assertion_secret: String,
    /// Session assertion TTL in seconds.
    #[serde(default = "default_assertion_ttl")]
    pub assertion_ttl_seconds: u64,
    /// Backing-service access-token cookie TTL in seconds.
    #[serde(default = "default_access_cookie_ttl")]
    pub access_cookie_ttl_seconds: u64,
    /// Backing-service refresh-token cookie TTL in seconds.
    #[serde(default = "default_refresh_cookie_ttl")]
    pub refresh_cookie_ttl_seconds: u64,
    /// The single user id granted unconditional management rights.
    /// When absent, no caller is ever treated as super-admin.
    #[serde(default)]
    pub super_admin_user_id: Option<Uuid>,
    /// Whether cookies carry the `Secure` attribute.
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,
}

impl AuthConfig {
    /// Whether the given user id is the configured super-admin.
    pub fn is_super_admin(&self, user_id: Uuid) -> bool {
        self.super_admin_user_id == Some(user_id)
    }
}

fn default_assertion_ttl() -> u64 {
    1800
}

fn default_access_cookie_ttl() -> u64 {
    3600
}

fn default_refresh_cookie_ttl() -> u64 {
    // 60 days
    5_184_000
}

fn default_secure_cookies() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn super_admin_match() {
        let id = Uuid::new_v4();
        let config = AuthConfig {
            assertion_secret: "secret".into(),
            assertion_ttl_seconds: 1800,
            access_cookie_ttl_seconds: 3600,
            refresh_cookie_ttl_seconds: 5_184_000,
            super_admin_user_id: Some(id),
            secure_cookies: true,
        };
        assert!(config.is_super_admin(id));
        assert!(!config.is_super_admin(Uuid::new_v4()));
    }

    #[test]
    fn no_super_admin_configured() {
        let config = AuthConfig {
            assertion_secret: "secret".into(),
            assertion_ttl_seconds: 1800,
            access_cookie_ttl_seconds: 3600,
            refresh_cookie_ttl_seconds: 5_184_000,
            super_admin_user_id: None,
            secure_cookies: true,
        };
        assert!(!config.is_super_admin(Uuid::new_v4()));
    }
}
