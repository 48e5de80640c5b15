//! Session assertion issue and verification.
//!
//! An assertion is a compact, HMAC-SHA256 signed token binding a user id
//! to an expiry. It lets a request prove its identity locally within a
//! short window instead of hitting the backing auth service on every call.

pub mod payload;
pub mod signer;

pub use payload::AssertionPayload;
pub use signer::AssertionSigner;
