//! Matching-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | EmptyCorpus | 503 |

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while ranking the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// There is nothing to match against, so no primary match exists.
    #[error("Cannot match against an empty dam corpus")]
    EmptyCorpus,
}

impl MatchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MatchError::EmptyCorpus => ErrorCode::EmptyCorpus,
        }
    }
}

impl From<MatchError> for DomainError {
    fn from(err: MatchError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
