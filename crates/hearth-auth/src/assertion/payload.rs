//! Assertion payload carried inside the signed token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed payload of a session assertion.
///
/// Carried entirely inside the token; never persisted. There is no
/// server-side revocation list: an assertion stays valid until expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionPayload {
    /// The authenticated principal this assertion is bound to.
    pub user_id: Uuid,
    /// Absolute expiry, whole seconds since the Unix epoch. The
    /// assertion is invalid at and after this instant.
    pub expires_at: i64,
}
