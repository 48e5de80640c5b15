//! # hearth-auth
//!
//! The access-control core of the Hearth platform: session assertions,
//! identity resolution, the backing auth service client, and the
//! community access evaluator.
//!
//! ## Modules
//!
//! - `assertion` — HMAC-signed, time-boxed session assertion issue/verify
//! - `identity` — per-request identity resolution over an ordered chain
//!   of credential sources
//! - `backend` — client for the external identity/session provider
//! - `access` — community access evaluation (owner / member / pending)

pub mod access;
pub mod assertion;
pub mod backend;
pub mod identity;

pub use access::{AccessDecision, AccessEvaluator, AccessStore, RepositoryAccessStore};
pub use assertion::{AssertionPayload, AssertionSigner};
pub use backend::{AuthBackend, BackendUser, HttpAuthBackend};
pub use identity::{CredentialSource, IdentityResolver, RequestCredentials};
