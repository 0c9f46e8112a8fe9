//! Infrastructure layer - Adapters, configuration, and logging
//!
//! Implements the application ports on top of `integration_geocoding` and
//! loads the layered application configuration.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::{FixedLocationAdapter, IpLocationAdapter, NominatimGeocodingAdapter};
pub use config::{
    AppConfig, DeviceLocationAppConfig, GeoLocationConfig, LocationProvider, MapAppConfig,
    PlannerAppConfig,
};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
