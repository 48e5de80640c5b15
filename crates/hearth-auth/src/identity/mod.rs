//! Per-request identity resolution.
//!
//! The resolver walks an explicit, ordered list of credential sources
//! and returns the first identity any of them yields. A source that
//! errors is treated as having produced nothing; the next source is
//! tried. No source performs writes.

pub mod credentials;
pub mod resolver;
pub mod source;

pub use credentials::RequestCredentials;
pub use resolver::IdentityResolver;
pub use source::{AssertionSource, BearerSource, CredentialSource, SessionSource};
