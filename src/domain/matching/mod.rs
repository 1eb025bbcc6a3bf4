//! Matching module - ranking the dam corpus against a trait vector.
//!
//! All functions are pure. The corpus is borrowed read-only, so any number
//! of diagnoses can rank the same corpus concurrently.

mod corpus;
mod dam;
mod errors;
mod matcher;
mod similarity;

pub use corpus::DamCorpus;
pub use dam::Dam;
pub use errors::MatchError;
pub use matcher::{DamMatcher, MatchResult, ScoredDam, DEFAULT_SECONDARY_COUNT};
pub use similarity::cosine_similarity;
