//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::{GeoPoint, PlaceQuery};
use integration_geocoding::{
    GeocodingClient, GeocodingError, NominatimConfig, NominatimGeocodingClient,
};
use tracing::{debug, instrument, warn};

/// Adapter for geocoding via Nominatim
#[derive(Debug)]
pub struct NominatimGeocodingAdapter {
    client: NominatimGeocodingClient,
}

impl NominatimGeocodingAdapter {
    /// Wrap an existing client
    #[must_use]
    pub const fn new(client: NominatimGeocodingClient) -> Self {
        Self { client }
    }

    /// Build the client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Map a forward lookup failure; only an empty match list is `NotFound`
    fn map_forward_error(query: &PlaceQuery, err: GeocodingError) -> ApplicationError {
        if err.is_no_match() {
            ApplicationError::not_found(query.as_str())
        } else {
            ApplicationError::ServiceError(err.to_string())
        }
    }
}

#[async_trait]
impl GeocodingPort for NominatimGeocodingAdapter {
    #[instrument(skip(self), fields(query = %query))]
    async fn forward(&self, query: &PlaceQuery) -> Result<GeoPoint, ApplicationError> {
        match self.client.geocode(query.as_str()).await {
            Ok(point) => {
                debug!(%point, "Forward lookup succeeded");
                Ok(point)
            },
            Err(e) => {
                warn!(error = %e, "Forward lookup failed");
                Err(Self::map_forward_error(query, e))
            },
        }
    }

    #[instrument(skip(self), fields(point = %point))]
    async fn reverse(&self, point: &GeoPoint) -> Result<String, ApplicationError> {
        self.client.reverse_geocode(point).await.map_err(|e| {
            warn!(error = %e, "Reverse lookup failed");
            ApplicationError::ServiceError(e.to_string())
        })
    }
}
