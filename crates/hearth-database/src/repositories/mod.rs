//! Concrete repository implementations.

pub mod community;
pub mod membership;
pub mod post;
pub mod user;

pub use community::{CommunityRepository, CreateCommunity};
pub use membership::MembershipRepository;
pub use post::PostRepository;
pub use user::UserRepository;
