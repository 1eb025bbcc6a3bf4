//! File-based Dam Source Adapter
//!
//! Reads the curated dam corpus from a single JSON or YAML file.
//! The format is chosen by file extension.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::matching::Dam;
use crate::ports::{CorpusError, DamSource};

/// Supported corpus file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CorpusFormat {
    Json,
    Yaml,
}

impl CorpusFormat {
    fn from_path(path: &Path) -> Result<Self, CorpusError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(CorpusFormat::Json),
            Some("yaml") | Some("yml") => Ok(CorpusFormat::Yaml),
            Some(other) => Err(CorpusError::UnsupportedFormat(other.to_string())),
            None => Err(CorpusError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// File-backed dam corpus
#[derive(Debug, Clone)]
pub struct FileDamSource {
    path: PathBuf,
}

impl FileDamSource {
    /// Create a source reading from `path`
    ///
    /// # Example
    /// ```ignore
    /// let source = FileDamSource::new("./data/dams.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DamSource for FileDamSource {
    async fn load_all(&self) -> Result<Vec<Dam>, CorpusError> {
        let format = CorpusFormat::from_path(&self.path)?;

        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            return Err(CorpusError::NotFound(self.path.display().to_string()));
        }

        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CorpusError::IoError(e.to_string()))?;

        let dams = match format {
            CorpusFormat::Json => serde_json::from_str(&raw)
                .map_err(|e| CorpusError::ParseFailed(e.to_string()))?,
            CorpusFormat::Yaml => serde_yaml::from_str(&raw)
                .map_err(|e| CorpusError::ParseFailed(e.to_string()))?,
        };

        Ok(dams)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    const JSON_CORPUS: &str = r#"[
        {
            "id": "Q11579453",
            "name_ja": "宮ヶ瀬ダム",
            "prefecture": "神奈川県",
            "purposes": ["F", "N", "W", "P"],
            "traits": {"storage": 90, "release": 40, "input": 35, "purpose": 85, "scale": 80, "stability": 75}
        },
        {
            "id": "Q11406437",
            "name_ja": "小河内ダム",
            "traits": {"storage": 100, "release": 30, "input": 20, "purpose": 30, "scale": 100, "stability": 90}
        }
    ]"#;

    const YAML_CORPUS: &str = r#"
- id: Q1058447
  name_ja: 黒部ダム
  purposes: [P]
  traits:
    storage: 100
    release: 88
    input: 12
    purpose: 30
    scale: 100
    stability: 55
"#;

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn loads_json_corpus_in_order() {
        let file = write_temp(".json", JSON_CORPUS);
        let dams = FileDamSource::new(file.path()).load_all().await.unwrap();

        assert_eq!(dams.len(), 2);
        assert_eq!(dams[0].name_ja, "宮ヶ瀬ダム");
        assert_eq!(dams[1].id.as_str(), "Q11406437");
        assert_eq!(dams[0].purposes.len(), 4);
    }

    #[tokio::test]
    async fn loads_yaml_corpus() {
        let file = write_temp(".yaml", YAML_CORPUS);
        let dams = FileDamSource::new(file.path()).load_all().await.unwrap();

        assert_eq!(dams.len(), 1);
        assert_eq!(dams[0].name_ja, "黒部ダム");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileDamSource::new(dir.path().join("absent.json"));
        let result = source.load_all().await;
        assert!(matches!(result, Err(CorpusError::NotFound(_))));
    }

    #[tokio::test]
    async fn invalid_traits_fail_to_parse() {
        let file = write_temp(".json", &JSON_CORPUS.replace("\"storage\": 90", "\"storage\": 190"));
        let result = FileDamSource::new(file.path()).load_all().await;
        assert!(matches!(result, Err(CorpusError::ParseFailed(_))));
    }

    #[tokio::test]
    async fn unknown_extension_is_rejected() {
        let file = write_temp(".csv", "id,name\n");
        let result = FileDamSource::new(file.path()).load_all().await;
        assert!(matches!(result, Err(CorpusError::UnsupportedFormat(_))));
    }

    #[test]
    fn describe_includes_path() {
        let source = FileDamSource::new("data/dams.json");
        assert_eq!(source.describe(), "file:data/dams.json");
    }
}
