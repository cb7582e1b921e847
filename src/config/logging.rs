//! Logging configuration and subscriber setup

use serde::Deserialize;
use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::error::ValidationError;

static INIT: Once = Once::new();

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidLogFilter(self.level.clone()))
    }

    /// Install the global subscriber. Logs go to stderr.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Calling this
    /// more than once is a no-op.
    pub fn init_tracing(&self) {
        INIT.call_once(|| {
            let filter = EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&self.level))
                .unwrap_or_else(|_| EnvFilter::new("info"));

            let json_layer = self
                .json
                .then(|| fmt::layer().json().with_writer(std::io::stderr));
            let text_layer = (!self.json).then(|| {
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr)
            });

            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .with(text_layer)
                .init();
        });
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info,tradeoff_engine=debug".to_string()
}
