//! Geocoding service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_nominatim_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (0 disables the timeout)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header; Nominatim's usage policy requires an identifying one
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Preferred result language (e.g. "en" or "hi,en")
    #[serde(default)]
    pub accept_language: Option<String>,

    /// Comma-separated ISO country codes to restrict forward search to
    #[serde(default)]
    pub country_filter: Option<String>,
}

fn default_nominatim_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("waymark/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_nominatim_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            accept_language: None,
            country_filter: None,
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("geocoding base_url must not be empty".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("geocoding user_agent must not be empty".to_string());
        }

        Ok(())
    }
}

/// Configuration for the ip-api.com position lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpLocationConfig {
    /// Base URL for the ip-api service
    #[serde(default = "default_ip_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (0 disables the timeout)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_ip_base_url() -> String {
    "http://ip-api.com".to_string()
}

impl Default for IpLocationConfig {
    fn default() -> Self {
        Self {
            base_url: default_ip_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl IpLocationConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominatim_config_default() {
        let config = NominatimConfig::default();
        assert_eq!(config.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.user_agent.starts_with("waymark/"));
        assert!(config.accept_language.is_none());
        assert!(config.country_filter.is_none());
    }

    #[test]
    fn test_nominatim_config_for_testing() {
        let config = NominatimConfig::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_validation_success() {
        assert!(NominatimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = NominatimConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_blank_user_agent() {
        let config = NominatimConfig {
            user_agent: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{"country_filter": "in"}"#;
        let config: NominatimConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.country_filter.as_deref(), Some("in"));
    }

    #[test]
    fn test_ip_location_config_default() {
        let config = IpLocationConfig::default();
        assert_eq!(config.base_url, "http://ip-api.com");
        assert_eq!(config.timeout_secs, 10);
    }
}
