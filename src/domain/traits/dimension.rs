//! Trait dimension enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named axis of a trait vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitDimension {
    /// Tendency to hold things back and accumulate.
    Storage,
    /// Tendency to let things out.
    Release,
    /// Reactivity to external input.
    Input,
    /// How many roles are played at once.
    Purpose,
    /// Preferred scale and time horizon.
    Scale,
    /// Resistance to change.
    Stability,
}

impl TraitDimension {
    /// All dimensions in canonical order.
    pub const ALL: [TraitDimension; 6] = [
        TraitDimension::Storage,
        TraitDimension::Release,
        TraitDimension::Input,
        TraitDimension::Purpose,
        TraitDimension::Scale,
        TraitDimension::Stability,
    ];

    /// Returns the lowercase name used in JSON.
    pub fn name(&self) -> &'static str {
        match self {
            TraitDimension::Storage => "storage",
            TraitDimension::Release => "release",
            TraitDimension::Input => "input",
            TraitDimension::Purpose => "purpose",
            TraitDimension::Scale => "scale",
            TraitDimension::Stability => "stability",
        }
    }

    /// Position of this dimension in [`TraitDimension::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for TraitDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_canonical_order() {
        for (i, dim) in TraitDimension::ALL.iter().enumerate() {
            assert_eq!(dim.index(), i);
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&TraitDimension::Stability).unwrap();
        assert_eq!(json, "\"stability\"");
    }

    #[test]
    fn displays_name() {
        assert_eq!(TraitDimension::Purpose.to_string(), "purpose");
    }
}
