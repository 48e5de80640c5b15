//! Membership domain entities.

pub mod model;
pub mod role;

pub use model::{CommunityAccessRow, Membership};
pub use role::MembershipRole;
