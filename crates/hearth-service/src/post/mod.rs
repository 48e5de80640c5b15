//! Community feed posts.

pub mod service;

pub use service::PostService;
