//! Client for the backing auth service.
//!
//! Hearth never authenticates users itself; it delegates to an external
//! identity/session provider and only resolves "who is calling" from the
//! credentials that provider issued.

pub mod bearer;
pub mod client;

pub use bearer::decode_unverified_subject;
pub use client::{AuthBackend, BackendUser, HttpAuthBackend};
