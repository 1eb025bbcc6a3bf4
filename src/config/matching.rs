//! Matching configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::matching::DEFAULT_SECONDARY_COUNT;

/// Upper bound on runner-up matches per diagnosis
pub const MAX_SECONDARY_COUNT: usize = 20;

/// Matching configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    /// Number of secondary matches returned after the primary
    #[serde(default = "default_secondary_count")]
    pub secondary_count: usize,
}

impl MatchingConfig {
    /// Validate matching configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.secondary_count > MAX_SECONDARY_COUNT {
            return Err(ValidationError::SecondaryCountTooLarge {
                max: MAX_SECONDARY_COUNT,
            });
        }
        Ok(())
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            secondary_count: default_secondary_count(),
        }
    }
}

fn default_secondary_count() -> usize {
    DEFAULT_SECONDARY_COUNT
}
