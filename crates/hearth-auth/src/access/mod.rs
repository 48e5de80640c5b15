//! Community access evaluation.
//!
//! One decision per (user, community) pair, derived from community
//! ownership and membership role. Storage failures degrade to a deny
//! decision instead of surfacing as request errors.

pub mod decision;
pub mod evaluator;
pub mod store;

pub use decision::AccessDecision;
pub use evaluator::AccessEvaluator;
pub use store::{AccessStore, RepositoryAccessStore};
