//! # hearth-api
//!
//! HTTP API layer for Hearth built on Axum.
//!
//! Provides the REST endpoints, session cookies, auth extractors,
//! middleware (CORS, compression, logging), DTOs, and error mapping.

pub mod app;
pub mod cookies;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_state, run_server};
pub use router::build_router;
pub use state::AppState;
