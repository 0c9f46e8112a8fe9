//! Builds the planner and its adapters from configuration

use std::sync::Arc;

use anyhow::Context;
use application::{DeviceLocationPort, RoutePlanner};
use domain::MapDefaults;
use infrastructure::{
    AppConfig, DeviceLocationAppConfig, FixedLocationAdapter, IpLocationAdapter, LocationProvider,
    NominatimGeocodingAdapter,
};
use tracing::debug;

/// Planner backed by Nominatim and the configured location provider
pub fn build_planner(config: &AppConfig) -> anyhow::Result<RoutePlanner> {
    let geocoder = NominatimGeocodingAdapter::with_config(&config.geocoding)
        .context("Failed to initialize geocoding")?;

    let mut planner =
        RoutePlanner::new(Arc::new(geocoder)).with_lookup_mode(config.planner.lookup_mode);

    if let Some(provider) = device_location_provider(&config.device_location)? {
        debug!(provider = provider.provider_name(), "Device location enabled");
        planner = planner.with_device_location(provider);
    }

    Ok(planner)
}

/// Adapter for the configured provider, `None` when disabled
pub fn device_location_provider(
    config: &DeviceLocationAppConfig,
) -> anyhow::Result<Option<Arc<dyn DeviceLocationPort>>> {
    match config.provider {
        LocationProvider::None => Ok(None),
        LocationProvider::Fixed => {
            let point = config
                .fixed
                .and_then(|fixed| fixed.to_geo_point())
                .context("device_location.fixed must hold valid coordinates")?;
            let provider: Arc<dyn DeviceLocationPort> = Arc::new(FixedLocationAdapter::new(point));
            Ok(Some(provider))
        },
        LocationProvider::Ip => {
            let adapter = IpLocationAdapter::with_config(&config.to_ip_config())
                .context("Failed to initialize IP location")?;
            let provider: Arc<dyn DeviceLocationPort> = Arc::new(adapter);
            Ok(Some(provider))
        },
    }
}

/// Map defaults, falling back to the built-in centre on bad coordinates
pub fn map_defaults(config: &AppConfig) -> MapDefaults {
    config.map.to_map_defaults().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use application::ApplicationError;
    use infrastructure::GeoLocationConfig;

    use super::*;

    #[tokio::test]
    async fn default_config_has_no_location_provider() {
        let planner = build_planner(&AppConfig::default()).unwrap();
        let err = planner.locate_current_position().await.unwrap_err();
        assert!(matches!(err, ApplicationError::LocationUnavailable(_)));
    }

    #[test]
    fn fixed_provider_is_built() {
        let config = DeviceLocationAppConfig {
            provider: LocationProvider::Fixed,
            fixed: Some(GeoLocationConfig {
                latitude: 12.9716,
                longitude: 77.5946,
            }),
            ..Default::default()
        };
        let provider = device_location_provider(&config).unwrap().unwrap();
        assert_eq!(provider.provider_name(), "fixed");
    }

    #[test]
    fn fixed_provider_without_point_fails() {
        let config = DeviceLocationAppConfig {
            provider: LocationProvider::Fixed,
            ..Default::default()
        };
        assert!(device_location_provider(&config).is_err());
    }

    #[test]
    fn ip_provider_is_built() {
        let config = DeviceLocationAppConfig {
            provider: LocationProvider::Ip,
            ..Default::default()
        };
        let provider = device_location_provider(&config).unwrap().unwrap();
        assert_eq!(provider.provider_name(), "ip");
    }

    #[test]
    fn map_defaults_follow_config() {
        let mut config = AppConfig::default();
        config.map.default_zoom = 9;
        assert_eq!(map_defaults(&config).zoom, 9);

        config.map.default_center.latitude = 500.0;
        assert_eq!(map_defaults(&config).center, MapDefaults::default().center);
    }
}
