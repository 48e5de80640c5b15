//! Community lifecycle and settings.

pub mod service;

pub use service::{CommunityService, CreateCommunityRequest, UpdateCommunityRequest};
