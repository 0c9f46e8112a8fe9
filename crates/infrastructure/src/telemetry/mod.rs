//! Logging initialization
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either a
//! human-readable or JSON formatter. Output goes to stderr so command output
//! on stdout stays machine-readable.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "warn", "info", "application=debug,infrastructure=info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit structured JSON lines instead of text
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
        }
    }
}

impl TelemetryConfig {
    /// Replace the configured filter, e.g. from a `-v` flag
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}

/// Initialize the global subscriber
///
/// `RUST_LOG` takes precedence over the configured filter.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .map_err(|e| TelemetryError::InvalidFilter(e.to_string()))?,
    };

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    debug!(json = config.json, "Telemetry initialized");
    Ok(())
}

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// Log filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telemetry_config_default() {
        let config = TelemetryConfig::default();
        assert_eq!(config.log_filter, "warn");
        assert!(!config.json);
    }

    #[test]
    fn telemetry_config_deserialize_partial() {
        let config: TelemetryConfig = serde_json::from_str(r#"{"json": true}"#).unwrap();
        assert!(config.json);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn with_log_filter_overrides() {
        let config = TelemetryConfig::default().with_log_filter("debug");
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn telemetry_error_display() {
        let err = TelemetryError::Init("already set".to_string());
        assert_eq!(err.to_string(), "Failed to initialize tracing: already set");
    }
}
