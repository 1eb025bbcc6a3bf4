//! Dam Source Port - Interface for acquiring the dam corpus.
//!
//! The corpus is produced by external dataset tooling. This port only
//! describes how an already-curated corpus is read into memory.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::matching::Dam;

/// Errors that can occur while loading the corpus
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Corpus not found at {0}")]
    NotFound(String),

    #[error("Failed to parse corpus: {0}")]
    ParseFailed(String),

    #[error("Unsupported corpus format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<CorpusError> for DomainError {
    fn from(err: CorpusError) -> Self {
        DomainError::new(ErrorCode::CorpusUnavailable, err.to_string())
    }
}

/// Port for reading the full dam corpus
#[async_trait]
pub trait DamSource: Send + Sync {
    /// Load every dam, in corpus order
    ///
    /// # Errors
    /// Returns `CorpusError` if the corpus cannot be read or parsed.
    /// Every returned dam carries a validated trait vector.
    async fn load_all(&self) -> Result<Vec<Dam>, CorpusError>;

    /// Human-readable description of where the corpus comes from, for logs
    fn describe(&self) -> String;
}
