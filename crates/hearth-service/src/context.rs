//! Per-request caller context.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Who is calling, established once per request at the HTTP boundary.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The resolved user id.
    pub user_id: Uuid,
    /// Whether the caller is the configured platform administrator.
    pub super_admin: bool,
    /// Client IP, when known.
    pub ip_address: Option<String>,
    /// Client user agent, when sent.
    pub user_agent: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for the given user.
    pub fn new(user_id: Uuid, super_admin: bool) -> Self {
        Self {
            user_id,
            super_admin,
            ip_address: None,
            user_agent: None,
            request_time: Utc::now(),
        }
    }
}
