//! DamCatalog - process-wide holder of the loaded dam corpus.
//!
//! The corpus is read from its [`DamSource`] at most once. Concurrent first
//! callers wait on the same load instead of reading the source in parallel.
//! A failed load is not remembered, so the next caller tries again.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{error, info, warn};

use crate::domain::foundation::DomainError;
use crate::domain::matching::DamCorpus;
use crate::ports::DamSource;

/// Lazily loaded, shared, read-only dam corpus.
pub struct DamCatalog {
    source: Arc<dyn DamSource>,
    corpus: OnceCell<Arc<DamCorpus>>,
}

impl DamCatalog {
    /// Creates a catalog that loads from `source` on first use.
    pub fn new(source: Arc<dyn DamSource>) -> Self {
        Self {
            source,
            corpus: OnceCell::new(),
        }
    }

    /// Creates a catalog that is already populated.
    pub fn with_corpus(source: Arc<dyn DamSource>, corpus: DamCorpus) -> Self {
        Self {
            source,
            corpus: OnceCell::new_with(Some(Arc::new(corpus))),
        }
    }

    /// Returns the corpus, loading it if this is the first call.
    ///
    /// # Errors
    ///
    /// Returns `CORPUS_UNAVAILABLE` if the source cannot be read or parsed.
    pub async fn corpus(&self) -> Result<Arc<DamCorpus>, DomainError> {
        let corpus = self
            .corpus
            .get_or_try_init(|| self.load())
            .await?;
        Ok(Arc::clone(corpus))
    }

    /// True once a load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.corpus.initialized()
    }

    async fn load(&self) -> Result<Arc<DamCorpus>, DomainError> {
        let origin = self.source.describe();
        let dams = self.source.load_all().await.map_err(|e| {
            error!(source = %origin, error = %e, "Failed to load dam corpus");
            DomainError::from(e)
        })?;

        let corpus = DamCorpus::new(dams);
        let duplicates = corpus.duplicate_ids();
        if duplicates > 0 {
            warn!(
                source = %origin,
                duplicates,
                "Dam corpus contains duplicate ids; first occurrence kept"
            );
        }
        info!(source = %origin, dams = corpus.len(), "Dam corpus loaded");

        Ok(Arc::new(corpus))
    }
}
