//! Dam corpus configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;

/// Where the dam corpus lives and when to load it
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    /// Path to a `.json`, `.yaml` or `.yml` corpus file
    #[serde(default = "default_path")]
    pub path: String,

    /// Load the corpus at startup instead of on first request
    #[serde(default = "default_preload")]
    pub preload: bool,
}

impl CorpusConfig {
    /// Validate corpus configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("corpus.path"));
        }

        let ext = Path::new(&self.path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" | "yaml" | "yml" => Ok(()),
            _ => Err(ValidationError::UnsupportedCorpusFormat(self.path.clone())),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            preload: default_preload(),
        }
    }
}

fn default_path() -> String {
    "data/dams.json".to_string()
}

fn default_preload() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_config_defaults() {
        let config = CorpusConfig::default();
        assert_eq!(config.path, "data/dams.json");
        assert!(config.preload);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_paths_are_accepted() {
        for path in ["dams.yaml", "dams.YML"] {
            let config = CorpusConfig {
                path: path.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "{path} should be accepted");
        }
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let config = CorpusConfig {
            path: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("corpus.path"))
        );
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let config = CorpusConfig {
            path: "dams.csv".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnsupportedCorpusFormat(_))
        ));
    }
}
