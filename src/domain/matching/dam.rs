//! Dam entity - one pre-scored member of the matching corpus.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DamId;
use crate::domain::traits::TraitVector;

/// A dam with descriptive attributes and its trait vector.
///
/// Field names follow the corpus JSON produced by the dataset tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dam {
    pub id: DamId,
    pub name_ja: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub river_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefecture: Option<String>,
    /// Purpose codes, e.g. `F` (flood control), `N` (river maintenance),
    /// `A` (irrigation), `W` (water supply), `I` (industry), `P` (power).
    #[serde(default)]
    pub purposes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dam_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_storage_m3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_storage_m3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_m: Option<f64>,
    #[serde(
        rename = "imageUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    pub traits: TraitVector,
}

impl Dam {
    /// Creates a dam with only the required fields populated.
    pub fn new(id: DamId, name_ja: impl Into<String>, traits: TraitVector) -> Self {
        Self {
            id,
            name_ja: name_ja.into(),
            name_en: None,
            river_name: None,
            prefecture: None,
            purposes: Vec::new(),
            dam_type: None,
            total_storage_m3: None,
            effective_storage_m3: None,
            height_m: None,
            image_url: None,
            traits,
        }
    }

    pub fn with_prefecture(mut self, prefecture: impl Into<String>) -> Self {
        self.prefecture = Some(prefecture.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": "Q1058447",
        "name_ja": "黒部ダム",
        "prefecture": "富山県",
        "purposes": ["P"],
        "height_m": 186,
        "total_storage_m3": 199285000,
        "imageUrl": "https://example.org/kurobe.jpg",
        "traits": {"storage": 100, "release": 88, "input": 12, "purpose": 30, "scale": 100, "stability": 55}
    }"#;

    #[test]
    fn deserializes_corpus_record() {
        let dam: Dam = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(dam.id.as_str(), "Q1058447");
        assert_eq!(dam.prefecture.as_deref(), Some("富山県"));
        assert_eq!(dam.height_m, Some(186.0));
        assert_eq!(dam.image_url.as_deref(), Some("https://example.org/kurobe.jpg"));
        assert!(dam.name_en.is_none());
        assert_eq!(dam.purposes, vec!["P".to_string()]);
    }

    #[test]
    fn rejects_record_with_out_of_range_traits() {
        let bad = SAMPLE.replace("\"storage\": 100", "\"storage\": 130");
        assert!(serde_json::from_str::<Dam>(&bad).is_err());
    }

    #[test]
    fn serializes_image_url_in_camel_case_and_skips_absent_fields() {
        let dam: Dam = serde_json::from_str(SAMPLE).unwrap();
        let json = serde_json::to_value(&dam).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("image_url").is_none());
        assert!(json.get("river_name").is_none());
    }
}
