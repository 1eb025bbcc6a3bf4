//! Simulated realtime provider.
//!
//! Produces plausible reservoir readings without any network access.
//! Values are deterministic per dam name and clock hour, with a seasonal
//! baseline: wetter months (June to October) run fuller, winter runs lower.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

use crate::domain::matching::Dam;
use crate::ports::{RealtimeStatus, RealtimeStatusProvider};

const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Deterministic stand-in for a river-information feed
#[derive(Debug, Clone, Default)]
pub struct SimulatedRealtimeProvider;

impl SimulatedRealtimeProvider {
    pub fn new() -> Self {
        Self
    }

    /// Readings for `dam` at a given local time.
    pub fn status_at(&self, dam: &Dam, now: DateTime<FixedOffset>) -> RealtimeStatus {
        let code = dam
            .name_ja
            .chars()
            .fold(0u32, |acc, c| acc.wrapping_add(c as u32));
        let hour = now.hour();

        let base_noise = f64::from(code % 20) - 10.0;
        let jitter = (f64::from(code.wrapping_add(hour) % 21) - 10.0) / 10.0;
        let storage = (seasonal_baseline(now.month0()) + base_noise + jitter).clamp(0.0, 100.0);

        let inflow = (f64::from(code % 50)
            + f64::from(code.wrapping_mul(7).wrapping_add(hour) % 100) / 10.0
            - 5.0)
            .max(0.0);
        let outflow =
            (inflow + f64::from(code.wrapping_mul(13).wrapping_add(hour) % 50) / 10.0 - 2.5).max(0.0);

        RealtimeStatus {
            storage_percent: Some(round1(storage)),
            inflow: Some(round1(inflow)),
            outflow: Some(round1(outflow)),
            time: Some(now.format("%Y/%m/%d %H:%M:%S").to_string()),
        }
    }
}

#[async_trait]
impl RealtimeStatusProvider for SimulatedRealtimeProvider {
    async fn fetch(&self, dam: &Dam) -> Option<RealtimeStatus> {
        let jst = FixedOffset::east_opt(JST_OFFSET_SECS)?;
        Some(self.status_at(dam, Utc::now().with_timezone(&jst)))
    }
}

/// Baseline storage percentage for a zero-based month.
fn seasonal_baseline(month0: u32) -> f64 {
    match month0 {
        5..=9 => 85.0,
        0..=2 | 11 => 60.0,
        _ => 70.0,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
