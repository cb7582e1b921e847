//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! (and optionally a config file) using the `config` and `dotenvy` crates.
//! Configuration is loaded with the `TRADEOFF_ENGINE` prefix and nested values
//! use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use tradeoff_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Max scenarios: {}", config.engine.max_scenarios);
//! ```

mod engine;
mod error;
mod logging;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "TRADEOFF_ENGINE";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scoring and presentation thresholds
    #[serde(default)]
    pub engine: EngineConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TRADEOFF_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TRADEOFF_ENGINE__ENGINE__MAX_SCENARIOS=2` -> `engine.max_scenarios = 2`
    /// - `TRADEOFF_ENGINE__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top
    ///
    /// The format (TOML, YAML, JSON) is inferred from the file extension.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::environment())
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
        self.engine.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    fn environment() -> config::Environment {
        config::Environment::default()
            .prefix(ENV_PREFIX)
            .separator("__")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("TRADEOFF_ENGINE__ENGINE__MAX_SCENARIOS");
        env::remove_var("TRADEOFF_ENGINE__ENGINE__COMPROMISE_GAP_THRESHOLD");
        env::remove_var("TRADEOFF_ENGINE__LOGGING__JSON");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.engine.max_scenarios, 4);
        assert_eq!(config.engine.compromise_gap_threshold, 20.0);
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TRADEOFF_ENGINE__ENGINE__MAX_SCENARIOS", "2");
        env::set_var("TRADEOFF_ENGINE__ENGINE__COMPROMISE_GAP_THRESHOLD", "15");
        env::set_var("TRADEOFF_ENGINE__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.max_scenarios, 2);
        assert_eq!(config.engine.compromise_gap_threshold, 15.0);
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_from_file_with_env_on_top() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[engine]\nmax_scenarios = 3\nstrength_threshold = 75.0\n\n[logging]\nlevel = \"warn\""
        )
        .unwrap();

        env::set_var("TRADEOFF_ENGINE__ENGINE__MAX_SCENARIOS", "1");
        let result = AppConfig::load_from_file(file.path());
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.max_scenarios, 1);
        assert_eq!(config.engine.strength_threshold, 75.0);
        assert_eq!(config.engine.weakness_threshold, 40.0);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let result = AppConfig::load_from_file("/nonexistent/tradeoff-engine.toml");
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_bad_engine_section() {
        let config = AppConfig {
            engine: EngineConfig {
                max_scenarios: 0,
                ..EngineConfig::default()
            },
            ..AppConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxScenarios));
    }
}
