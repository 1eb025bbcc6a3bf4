//! In-memory Dam Source Adapter
//!
//! Serves a fixed list of dams. Used for tests and for embedding a corpus
//! that was built elsewhere in the process.

use async_trait::async_trait;

use crate::domain::matching::Dam;
use crate::ports::{CorpusError, DamSource};

/// Dam source backed by a `Vec` held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticDamSource {
    dams: Vec<Dam>,
}

impl StaticDamSource {
    pub fn new(dams: Vec<Dam>) -> Self {
        Self { dams }
    }
}

#[async_trait]
impl DamSource for StaticDamSource {
    async fn load_all(&self) -> Result<Vec<Dam>, CorpusError> {
        Ok(self.dams.clone())
    }

    fn describe(&self) -> String {
        format!("static:{} dams", self.dams.len())
    }
}
