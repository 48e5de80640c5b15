//! # hearth-service
//!
//! Business logic for the Hearth platform. Services own the access
//! rules for each operation; repositories stay policy-free.

pub mod admin;
pub mod community;
pub mod context;
pub mod membership;
pub mod post;
pub mod store;

#[cfg(test)]
mod testutil;

pub use admin::AdminService;
pub use community::CommunityService;
pub use context::RequestContext;
pub use membership::MembershipService;
pub use post::PostService;
pub use store::{CommunityStore, MembershipStore, PostStore};
