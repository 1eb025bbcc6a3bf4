//! RealtimeStatusProvider port - optional live reservoir readings.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::matching::Dam;

/// Snapshot of a reservoir's current state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeStatus {
    /// Storage level as a percentage of capacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_percent: Option<f64>,
    /// Inflow in m³/s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflow: Option<f64>,
    /// Outflow in m³/s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outflow: Option<f64>,
    /// Local observation time, formatted for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Enrichment source for dam detail pages.
///
/// Implementations must not fail the request: anything that goes wrong
/// is reported as `None` and the caller renders an empty object.
#[async_trait]
pub trait RealtimeStatusProvider: Send + Sync {
    async fn fetch(&self, dam: &Dam) -> Option<RealtimeStatus>;
}
