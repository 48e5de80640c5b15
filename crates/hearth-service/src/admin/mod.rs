//! Platform administration.

pub mod service;

pub use service::{AdminService, PlatformStats};
