//! Route handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod community;
pub mod health;
pub mod membership;
pub mod post;
