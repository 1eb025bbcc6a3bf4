//! GetDamDetailHandler - Query handler for a single dam with live readings.

use std::sync::Arc;

use crate::application::DamCatalog;
use crate::domain::foundation::{DamId, DomainError, ErrorCode};
use crate::domain::matching::Dam;
use crate::ports::{RealtimeStatus, RealtimeStatusProvider};

/// Query for one dam by id.
#[derive(Debug, Clone)]
pub struct GetDamDetailQuery {
    pub dam_id: DamId,
}

/// A dam with optional realtime enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct DamDetail {
    pub dam: Dam,
    pub realtime: Option<RealtimeStatus>,
}

/// Handler for dam detail queries.
pub struct GetDamDetailHandler {
    dams: Arc<DamCatalog>,
    realtime: Arc<dyn RealtimeStatusProvider>,
}

impl GetDamDetailHandler {
    pub fn new(dams: Arc<DamCatalog>, realtime: Arc<dyn RealtimeStatusProvider>) -> Self {
        Self { dams, realtime }
    }

    /// Looks up a dam and attaches whatever realtime data is available.
    ///
    /// # Errors
    ///
    /// - `DAM_NOT_FOUND` if no dam has the given id
    /// - `CORPUS_UNAVAILABLE` if the dam corpus cannot be loaded
    pub async fn handle(&self, query: GetDamDetailQuery) -> Result<DamDetail, DomainError> {
        let corpus = self.dams.corpus().await?;
        let dam = corpus.get(query.dam_id.as_str()).cloned().ok_or_else(|| {
            DomainError::new(ErrorCode::DamNotFound, "Dam not found")
                .with_detail("dam_id", query.dam_id.to_string())
        })?;

        let realtime = self.realtime.fetch(&dam).await;
        Ok(DamDetail { dam, realtime })
    }
}
