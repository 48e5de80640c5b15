//! # hearth-entity
//!
//! Domain entities for the Hearth community platform: users, communities,
//! memberships, and feed posts. All entities derive `sqlx::FromRow` and
//! map 1:1 onto the baseline schema.

pub mod community;
pub mod membership;
pub mod post;
pub mod user;

pub use community::Community;
pub use membership::{CommunityAccessRow, Membership, MembershipRole};
pub use post::Post;
pub use user::User;
