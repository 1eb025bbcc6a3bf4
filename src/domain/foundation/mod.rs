//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the DamBTI domain.

mod errors;
mod ids;
mod match_rate;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChoiceKey, DamId, QuestionId};
pub use match_rate::MatchRate;
