//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `integrations`: device location provider and coordinate pairs
//!
//! Geocoding settings reuse [`NominatimConfig`] from `integration_geocoding`
//! and logging settings reuse [`TelemetryConfig`].

mod integrations;

use std::path::Path;

use application::LookupMode;
use domain::{DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM, MapDefaults};
use integration_geocoding::NominatimConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use integrations::{DeviceLocationAppConfig, GeoLocationConfig, LocationProvider};

use crate::telemetry::TelemetryConfig;

/// Environment variable prefix (e.g. `WAYMARK_PLANNER__LOOKUP_MODE`)
pub const ENV_PREFIX: &str = "WAYMARK";

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "waymark";

/// Highest zoom level tile maps support
const MAX_ZOOM: u8 = 19;

/// Route planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerAppConfig {
    /// How the two forward lookups are issued
    #[serde(default)]
    pub lookup_mode: LookupMode,
}

/// Map surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapAppConfig {
    /// Centre shown before any marker is placed
    #[serde(default = "default_map_center")]
    pub default_center: GeoLocationConfig,

    /// Initial zoom level
    #[serde(default = "default_map_zoom")]
    pub default_zoom: u8,
}

const fn default_map_center() -> GeoLocationConfig {
    GeoLocationConfig {
        latitude: DEFAULT_MAP_CENTER.latitude(),
        longitude: DEFAULT_MAP_CENTER.longitude(),
    }
}

const fn default_map_zoom() -> u8 {
    DEFAULT_MAP_ZOOM
}

impl Default for MapAppConfig {
    fn default() -> Self {
        Self {
            default_center: default_map_center(),
            default_zoom: default_map_zoom(),
        }
    }
}

impl MapAppConfig {
    /// Convert to domain `MapDefaults`
    ///
    /// Returns `None` if the centre coordinates are invalid.
    #[must_use]
    pub fn to_map_defaults(&self) -> Option<MapDefaults> {
        self.default_center.to_geo_point().map(|center| MapDefaults {
            center,
            zoom: self.default_zoom,
        })
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Nominatim geocoding service
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Route planner behaviour
    #[serde(default)]
    pub planner: PlannerAppConfig,

    /// "My location" provider
    #[serde(default)]
    pub device_location: DeviceLocationAppConfig,

    /// Map defaults
    #[serde(default)]
    pub map: MapAppConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `waymark.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (required) or the default
    /// `waymark.toml` (optional), then environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("planner.lookup_mode", "concurrent")?
            .set_default("device_location.provider", "none")?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., WAYMARK_GEOCODING__TIMEOUT_SECS)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            lookup_mode = %config.planner.lookup_mode,
            provider = %config.device_location.provider,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        self.geocoding.validate()?;
        if self.geocoding.timeout_secs == 0 {
            return Err("geocoding.timeout_secs must be greater than 0".to_string());
        }

        self.device_location.validate()?;

        if self.map.to_map_defaults().is_none() {
            return Err(format!(
                "map.default_center is out of range: {}, {}",
                self.map.default_center.latitude, self.map.default_center.longitude
            ));
        }
        if self.map.default_zoom > MAX_ZOOM {
            return Err(format!(
                "map.default_zoom must be at most {MAX_ZOOM}, got {}",
                self.map.default_zoom
            ));
        }

        if self.telemetry.log_filter.trim().is_empty() {
            return Err("telemetry.log_filter must not be empty".to_string());
        }

        Ok(())
    }
}
