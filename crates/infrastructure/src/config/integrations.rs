//! Integration configurations: device location provider and shared coordinates.

use std::fmt;

use integration_geocoding::IpLocationConfig;
use serde::{Deserialize, Serialize};

/// Geographic location configuration (latitude/longitude pair)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to domain `GeoPoint` value object
    ///
    /// Returns `None` if coordinates are invalid.
    #[must_use]
    pub fn to_geo_point(&self) -> Option<domain::GeoPoint> {
        domain::GeoPoint::new(self.latitude, self.longitude).ok()
    }
}

// ==============================
// Device Location Configuration
// ==============================

/// Where "my location" comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationProvider {
    /// No provider; locating always reports the position as unavailable
    #[default]
    None,
    /// A fixed coordinate from configuration
    Fixed,
    /// IP geolocation via ip-api.com
    Ip,
}

impl fmt::Display for LocationProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Fixed => write!(f, "fixed"),
            Self::Ip => write!(f, "ip"),
        }
    }
}

/// Device location configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceLocationAppConfig {
    /// Active provider
    #[serde(default)]
    pub provider: LocationProvider,

    /// Coordinates reported by the `fixed` provider
    #[serde(default)]
    pub fixed: Option<GeoLocationConfig>,

    /// Base URL for the ip-api service
    #[serde(default = "default_ip_base_url")]
    pub ip_base_url: String,

    /// Request timeout in seconds for the `ip` provider
    #[serde(default = "default_ip_timeout")]
    pub timeout_secs: u64,
}

fn default_ip_base_url() -> String {
    IpLocationConfig::default().base_url
}

const fn default_ip_timeout() -> u64 {
    10
}

impl Default for DeviceLocationAppConfig {
    fn default() -> Self {
        Self {
            provider: LocationProvider::default(),
            fixed: None,
            ip_base_url: default_ip_base_url(),
            timeout_secs: default_ip_timeout(),
        }
    }
}

impl DeviceLocationAppConfig {
    /// Client configuration for the `ip` provider
    #[must_use]
    pub fn to_ip_config(&self) -> IpLocationConfig {
        IpLocationConfig {
            base_url: self.ip_base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Validate the provider settings
    ///
    /// # Errors
    ///
    /// Returns an error if the selected provider is misconfigured.
    pub fn validate(&self) -> Result<(), String> {
        match self.provider {
            LocationProvider::None => Ok(()),
            LocationProvider::Fixed => match self.fixed {
                None => Err("device_location.fixed is required for the fixed provider".to_string()),
                Some(fixed) if fixed.to_geo_point().is_none() => Err(format!(
                    "device_location.fixed is out of range: {}, {}",
                    fixed.latitude, fixed.longitude
                )),
                Some(_) => Ok(()),
            },
            LocationProvider::Ip => {
                if self.ip_base_url.trim().is_empty() {
                    return Err("device_location.ip_base_url must not be empty".to_string());
                }
                if self.timeout_secs == 0 {
                    return Err("device_location.timeout_secs must be greater than 0".to_string());
                }
                Ok(())
            },
        }
    }
}
