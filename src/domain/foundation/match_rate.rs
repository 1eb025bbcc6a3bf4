//! Match rate value object (0-100 percentage scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A similarity score rescaled to a percentage between 0 and 100 inclusive,
/// rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchRate(f64);

impl MatchRate {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a MatchRate from a cosine similarity in [-1, 1].
    ///
    /// Negative or non-finite similarities map to zero.
    pub fn from_similarity(similarity: f64) -> Self {
        if !similarity.is_finite() {
            return Self::ZERO;
        }
        let percent = (similarity * 100.0).clamp(0.0, 100.0);
        Self((percent * 10.0).round() / 10.0)
    }

    /// Returns the percentage value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for MatchRate {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for MatchRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
