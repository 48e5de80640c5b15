//! Backing auth service configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the external identity/session provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backing auth service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Public API key sent with every request.
    #[serde(default)]
    pub api_key: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:9999".to_string()
}

fn default_timeout() -> u64 {
    10
}
