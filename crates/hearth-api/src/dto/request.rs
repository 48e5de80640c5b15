//! Request body DTOs with validation.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use hearth_core::error::AppError;
use hearth_core::result::AppResult;
use hearth_entity::MembershipRole;

/// Validates a body and converts failures to a validation error.
pub fn validate<T: Validate>(body: &T) -> AppResult<()> {
    body.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))
}

/// Slugs are lowercase alphanumerics and hyphens.
fn validate_slug_charset(slug: &str) -> Result<(), ValidationError> {
    let ok = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if ok && !slug.starts_with('-') && !slug.ends_with('-') {
        Ok(())
    } else {
        Err(ValidationError::new("slug_charset"))
    }
}

/// POST /api/auth/token-sync
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TokenSyncRequest {
    /// Backing-service access token to validate and cookie.
    #[validate(length(min = 1))]
    pub access_token: String,
    /// Optional refresh token to cookie alongside it.
    pub refresh_token: Option<String>,
}

/// POST /api/communities
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommunityRequest {
    /// URL slug, unique platform-wide.
    #[validate(length(min = 3, max = 50), custom(function = validate_slug_charset))]
    pub slug: String,
    /// Display name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Optional description.
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// PUT /api/communities/{id}/settings
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommunityRequest {
    /// New display name.
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    /// New description.
    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// POST /api/communities/{id}/posts
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// Post body.
    #[validate(length(min = 1, max = 10000))]
    pub body: String,
}

/// PUT /api/communities/{id}/members/{user_id}
#[derive(Debug, Clone, Deserialize)]
pub struct SetRoleRequest {
    /// Target role. Only `admin` and `member` are accepted.
    pub role: MembershipRole,
}

/// PUT /api/admin/users/{id}/suspension
#[derive(Debug, Clone, Deserialize)]
pub struct SuspensionRequest {
    /// New suspension state.
    pub suspended: bool,
}

/// PUT /api/admin/communities/{id}/disabled
#[derive(Debug, Clone, Deserialize)]
pub struct DisabledRequest {
    /// New disabled state.
    pub disabled: bool,
}

/// PUT /api/admin/communities/{id}/featured
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedRequest {
    /// New featured state.
    pub featured: bool,
}
