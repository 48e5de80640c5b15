//! Roster management: joining, listing, role changes, removal.

pub mod service;

pub use service::MembershipService;
