//! The per-request access decision.

use serde::Serialize;
use uuid::Uuid;

use hearth_entity::MembershipRole;

/// What a given user may do in a given community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDecision {
    /// The user owns the community.
    pub is_owner: bool,
    /// The user holds a non-pending membership (owners included only
    /// when they also hold a membership row).
    pub is_member: bool,
    /// The user may change community settings and manage members.
    pub can_manage: bool,
    /// The raw membership role, if any row exists (pending included).
    pub role: Option<MembershipRole>,
}

impl AccessDecision {
    /// Derives a decision from ownership and membership facts.
    ///
    /// `owner_id` is `None` when the community does not exist; a missing
    /// community grants nothing beyond platform-admin override.
    pub fn derive(
        owner_id: Option<Uuid>,
        role: Option<MembershipRole>,
        user_id: Uuid,
        super_admin: bool,
    ) -> Self {
        let is_owner = owner_id == Some(user_id);
        let is_member = role.map(|r| r.is_member()).unwrap_or(false);
        let can_manage =
            super_admin || is_owner || role.map(|r| r.can_manage()).unwrap_or(false);
        Self {
            is_owner,
            is_member,
            can_manage,
            role,
        }
    }

    /// The conservative decision used when storage is unavailable:
    /// nothing is granted except the platform-admin override.
    pub fn deny(super_admin: bool) -> Self {
        Self {
            is_owner: false,
            is_member: false,
            can_manage: super_admin,
            role: None,
        }
    }

    /// Whether the user may read member-gated content.
    pub fn can_read(&self) -> bool {
        self.can_manage || self.is_member
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_without_membership_row_manages_but_is_not_member() {
        let user = Uuid::new_v4();
        let decision = AccessDecision::derive(Some(user), None, user, false);
        assert!(decision.is_owner);
        assert!(!decision.is_member);
        assert!(decision.can_manage);
        assert!(decision.can_read());
    }

    #[test]
    fn plain_member_reads_but_does_not_manage() {
        let user = Uuid::new_v4();
        let decision =
            AccessDecision::derive(Some(Uuid::new_v4()), Some(MembershipRole::Member), user, false);
        assert!(!decision.is_owner);
        assert!(decision.is_member);
        assert!(!decision.can_manage);
        assert!(decision.can_read());
    }

    #[test]
    fn admin_role_manages_without_owning() {
        let user = Uuid::new_v4();
        let decision =
            AccessDecision::derive(Some(Uuid::new_v4()), Some(MembershipRole::Admin), user, false);
        assert!(!decision.is_owner);
        assert!(decision.is_member);
        assert!(decision.can_manage);
    }

    #[test]
    fn pending_membership_grants_nothing() {
        let user = Uuid::new_v4();
        let decision = AccessDecision::derive(
            Some(Uuid::new_v4()),
            Some(MembershipRole::Pending),
            user,
            false,
        );
        assert!(!decision.is_member);
        assert!(!decision.can_manage);
        assert!(!decision.can_read());
        assert_eq!(decision.role, Some(MembershipRole::Pending));
    }

    #[test]
    fn super_admin_manages_even_missing_communities() {
        let user = Uuid::new_v4();
        let decision = AccessDecision::derive(None, None, user, true);
        assert!(!decision.is_owner);
        assert!(!decision.is_member);
        assert!(decision.can_manage);
    }

    #[test]
    fn deny_grants_only_the_super_admin_override() {
        assert!(!AccessDecision::deny(false).can_read());
        assert!(AccessDecision::deny(true).can_manage);
        assert!(!AccessDecision::deny(true).is_member);
    }
}
