//! Type tag classifier - threshold lookup over tag families.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::traits::{TraitDimension, TraitVector};

/// Values strictly below this are classified low.
pub const LOW_THRESHOLD: f64 = 40.0;

/// Values strictly above this are classified high.
pub const HIGH_THRESHOLD: f64 = 60.0;

/// Maximum number of tags returned.
pub const MAX_TAGS: usize = 3;

/// Band a dimension value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagLevel {
    Low,
    Balanced,
    High,
}

impl TagLevel {
    /// Classifies a value: `< 40` low, `> 60` high, otherwise balanced.
    pub fn of(value: f64) -> Self {
        if value > HIGH_THRESHOLD {
            TagLevel::High
        } else if value < LOW_THRESHOLD {
            TagLevel::Low
        } else {
            TagLevel::Balanced
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TagLevel::Low => "low",
            TagLevel::Balanced => "balanced",
            TagLevel::High => "high",
        }
    }
}

/// Mutually exclusive labels governed by one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagFamily {
    pub dimension: TraitDimension,
    pub low: &'static str,
    pub balanced: &'static str,
    pub high: &'static str,
}

impl TagFamily {
    pub fn label(&self, level: TagLevel) -> &'static str {
        match level {
            TagLevel::Low => self.low,
            TagLevel::Balanced => self.balanced,
            TagLevel::High => self.high,
        }
    }

    pub fn classify(&self, vector: &TraitVector) -> TypeTag {
        let level = TagLevel::of(vector.get(self.dimension));
        TypeTag {
            dimension: self.dimension,
            level,
            label: self.label(level),
        }
    }
}

/// Families in priority order.
pub const TAG_FAMILIES: [TagFamily; 4] = [
    TagFamily {
        dimension: TraitDimension::Storage,
        low: "流れやすい",
        balanced: "調整型",
        high: "貯め込み型",
    },
    TagFamily {
        dimension: TraitDimension::Stability,
        low: "変動派",
        balanced: "柔軟性あり",
        high: "安定志向",
    },
    TagFamily {
        dimension: TraitDimension::Purpose,
        low: "単機能職人",
        balanced: "バランス調整役",
        high: "多目的ハイブリッド",
    },
    TagFamily {
        dimension: TraitDimension::Scale,
        low: "現場・短期集中",
        balanced: "地域密着型",
        high: "広域・長期担当",
    },
];

/// A descriptive tag derived from one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeTag {
    pub dimension: TraitDimension,
    pub level: TagLevel,
    pub label: &'static str,
}

impl TypeTag {
    /// Stable machine-readable code, e.g. `storage-high`.
    pub fn code(&self) -> String {
        format!("{}-{}", self.dimension.name(), self.level.name())
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Stateless classifier over [`TAG_FAMILIES`].
pub struct TagClassifier;

impl TagClassifier {
    /// Returns at most [`MAX_TAGS`] tags, taken from the families in priority order.
    pub fn classify(vector: &TraitVector) -> Vec<TypeTag> {
        TAG_FAMILIES
            .iter()
            .map(|family| family.classify(vector))
            .take(MAX_TAGS)
            .collect()
    }

    /// Same as [`TagClassifier::classify`], returning display labels.
    pub fn labels(vector: &TraitVector) -> Vec<String> {
        Self::classify(vector)
            .into_iter()
            .map(|tag| tag.label.to_string())
            .collect()
    }
}
