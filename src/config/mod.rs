//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DAMBTI` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a runnable config.
//!
//! # Example
//!
//! ```no_run
//! use dambti::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Corpus at {}", config.corpus.path);
//! ```

mod corpus;
mod error;
mod matching;
mod server;

pub use corpus::CorpusConfig;
pub use error::{ConfigError, ValidationError};
pub use matching::{MatchingConfig, MAX_SECONDARY_COUNT};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Dam corpus location and loading policy
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Ranking options
    #[serde(default)]
    pub matching: MatchingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DAMBTI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DAMBTI__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `DAMBTI__CORPUS__PATH=data/dams.yaml` -> `corpus.path = data/dams.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DAMBTI")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.corpus.validate()?;
        self.matching.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "DAMBTI__SERVER__PORT",
        "DAMBTI__SERVER__ENVIRONMENT",
        "DAMBTI__CORPUS__PATH",
        "DAMBTI__CORPUS__PRELOAD",
        "DAMBTI__MATCHING__SECONDARY_COUNT",
        "DAMBTI__SERVER__CORS_ORIGINS",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.corpus.path, "data/dams.json");
        assert_eq!(config.matching.secondary_count, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DAMBTI__SERVER__PORT", "8081");
        env::set_var("DAMBTI__CORPUS__PATH", "fixtures/dams.yaml");
        env::set_var("DAMBTI__CORPUS__PRELOAD", "false");
        env::set_var("DAMBTI__MATCHING__SECONDARY_COUNT", "5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.corpus.path, "fixtures/dams.yaml");
        assert!(!config.corpus.preload);
        assert_eq!(config.matching.secondary_count, 5);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DAMBTI__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_validate_reports_first_invalid_section() {
        let mut config = AppConfig::default();
        config.matching.secondary_count = 100;
        assert_eq!(
            config.validate(),
            Err(ValidationError::SecondaryCountTooLarge { max: 20 })
        );
    }
}
