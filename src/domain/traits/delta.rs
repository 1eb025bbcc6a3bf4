//! Sparse trait delta carried by each survey choice.

use serde::{Deserialize, Serialize};

use super::TraitDimension;

/// Signed per-dimension effect of a choice.
///
/// Absent dimensions are `None` and contribute nothing when merged.
/// Unknown keys in the serialized form are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability: Option<i32>,
}

impl TraitDelta {
    /// A delta that touches nothing.
    pub const NONE: Self = Self {
        storage: None,
        release: None,
        input: None,
        purpose: None,
        scale: None,
        stability: None,
    };

    /// Returns a copy with `dimension` set to `value`.
    pub fn with(mut self, dimension: TraitDimension, value: i32) -> Self {
        match dimension {
            TraitDimension::Storage => self.storage = Some(value),
            TraitDimension::Release => self.release = Some(value),
            TraitDimension::Input => self.input = Some(value),
            TraitDimension::Purpose => self.purpose = Some(value),
            TraitDimension::Scale => self.scale = Some(value),
            TraitDimension::Stability => self.stability = Some(value),
        }
        self
    }

    /// Returns the effect on `dimension`, if any.
    pub fn get(&self, dimension: TraitDimension) -> Option<i32> {
        match dimension {
            TraitDimension::Storage => self.storage,
            TraitDimension::Release => self.release,
            TraitDimension::Input => self.input,
            TraitDimension::Purpose => self.purpose,
            TraitDimension::Scale => self.scale,
            TraitDimension::Stability => self.stability,
        }
    }

    /// Iterates over the present effects in canonical dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitDimension, i32)> + '_ {
        TraitDimension::ALL
            .iter()
            .filter_map(move |dim| self.get(*dim).map(|v| (*dim, v)))
    }
}
