//! Credentials extracted once from an incoming request.

/// Everything a request can carry that might identify the caller.
///
/// Extracted from headers/cookies at the HTTP boundary so the resolver
/// and its sources never touch request types directly.
#[derive(Debug, Clone, Default)]
pub struct RequestCredentials {
    /// The `ssa` session assertion cookie value.
    pub assertion: Option<String>,
    /// The `Authorization: Bearer` token, without the scheme prefix.
    pub bearer: Option<String>,
    /// The backing-service access-token cookie value.
    pub access_token: Option<String>,
    /// The backing-service refresh-token cookie value.
    pub refresh_token: Option<String>,
}

impl RequestCredentials {
    /// Credentials carrying only a session assertion.
    pub fn from_assertion(token: impl Into<String>) -> Self {
        Self {
            assertion: Some(token.into()),
            ..Self::default()
        }
    }

    /// Credentials carrying only a bearer token.
    pub fn from_bearer(token: impl Into<String>) -> Self {
        Self {
            bearer: Some(token.into()),
            ..Self::default()
        }
    }
}
