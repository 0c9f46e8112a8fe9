//! Device location adapters - Implement DeviceLocationPort
//!
//! A CLI has no GPS, so the "device" position comes either from a fixed
//! coordinate in configuration or from an IP geolocation service.

use application::error::ApplicationError;
use application::ports::DeviceLocationPort;
use async_trait::async_trait;
use domain::GeoPoint;
use integration_geocoding::{IpApiClient, IpLocationConfig, PositionClient};
use tracing::{debug, instrument, warn};

/// Reports a position taken from configuration
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationAdapter {
    point: GeoPoint,
}

impl FixedLocationAdapter {
    /// Create an adapter that always reports `point`
    #[must_use]
    pub const fn new(point: GeoPoint) -> Self {
        Self { point }
    }
}

#[async_trait]
impl DeviceLocationPort for FixedLocationAdapter {
    async fn current_position(&self) -> Result<GeoPoint, ApplicationError> {
        debug!(point = %self.point, "Using configured position");
        Ok(self.point)
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }
}

/// Reports the approximate position of this machine's public IP
#[derive(Debug)]
pub struct IpLocationAdapter {
    client: IpApiClient,
}

impl IpLocationAdapter {
    /// Wrap an existing client
    #[must_use]
    pub const fn new(client: IpApiClient) -> Self {
        Self { client }
    }

    /// Build the client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: &IpLocationConfig) -> Result<Self, ApplicationError> {
        let client =
            IpApiClient::new(config).map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl DeviceLocationPort for IpLocationAdapter {
    #[instrument(skip(self))]
    async fn current_position(&self) -> Result<GeoPoint, ApplicationError> {
        self.client.current_position().await.map_err(|e| {
            warn!(error = %e, "IP position lookup failed");
            ApplicationError::LocationUnavailable(e.to_string())
        })
    }

    fn provider_name(&self) -> &'static str {
        "ip"
    }
}
