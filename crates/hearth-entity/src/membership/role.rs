//! Membership role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Roles a user can hold on a community roster.
///
/// `Pending` rows represent join requests that have not been approved;
/// they grant no read access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "membership_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MembershipRole {
    /// Roster row for the community owner.
    Owner,
    /// Can administer the community alongside the owner.
    Admin,
    /// Approved member with read access.
    Member,
    /// Join request awaiting approval. Not a member.
    Pending,
}

impl MembershipRole {
    /// Whether this role grants read access to community-scoped content.
    pub fn is_member(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Whether this role grants management rights on its own.
    pub fn can_manage(&self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }
}

impl fmt::Display for MembershipRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owner => write!(f, "owner"),
            Self::Admin => write!(f, "admin"),
            Self::Member => write!(f, "member"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_not_member() {
        assert!(!MembershipRole::Pending.is_member());
        assert!(MembershipRole::Member.is_member());
        assert!(MembershipRole::Admin.is_member());
        assert!(MembershipRole::Owner.is_member());
    }

    #[test]
    fn only_owner_and_admin_manage() {
        assert!(MembershipRole::Owner.can_manage());
        assert!(MembershipRole::Admin.can_manage());
        assert!(!MembershipRole::Member.can_manage());
        assert!(!MembershipRole::Pending.can_manage());
    }
}
