//! Nominatim geocoding client
//!
//! Converts free-form place names to coordinates and back using the
//! [Nominatim](https://nominatim.openstreetmap.org) API (OpenStreetMap).
//!
//! Each call is a single request: no caching, no rate limiting, no retries.

use std::time::Duration;

use async_trait::async_trait;
use domain::GeoPoint;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::NominatimConfig;
use crate::error::GeocodingError;
use crate::models::{NominatimPlace, NominatimReverse};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form place name to the coordinates of its first match
    async fn geocode(&self, query: &str) -> Result<GeoPoint, GeocodingError>;

    /// Convert coordinates to a human-readable place name
    async fn reverse_geocode(&self, point: &GeoPoint) -> Result<String, GeocodingError>;
}

/// Nominatim-based geocoding client
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Query parameters shared by both endpoints
    fn common_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("format", "jsonv2".to_string())];
        if let Some(ref lang) = self.config.accept_language {
            params.push(("accept-language", lang.clone()));
        }
        params
    }

    /// Issue a GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, GeocodingError> {
        let url = format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| GeocodingError::from_transport(&e))?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))
    }

    /// Turn the first search hit into a point
    fn parse_place(place: &NominatimPlace) -> Result<GeoPoint, GeocodingError> {
        let lat: f64 = place
            .lat
            .trim()
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid latitude: {}", place.lat)))?;
        let lon: f64 = place
            .lon
            .trim()
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid longitude: {}", place.lon)))?;

        GeoPoint::new(lat, lon).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<GeoPoint, GeocodingError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodingError::InvalidQuery(
                "Query must not be empty".to_string(),
            ));
        }

        let mut params = self.common_params();
        params.push(("q", query.to_string()));
        params.push(("limit", "1".to_string()));
        if let Some(ref countries) = self.config.country_filter {
            params.push(("countrycodes", countries.clone()));
        }

        debug!(%query, "Geocoding place");

        let places: Vec<NominatimPlace> = self.get_json("search", &params).await?;

        let place = places
            .first()
            .ok_or_else(|| GeocodingError::NoMatch(query.to_string()))?;

        let point = Self::parse_place(place)?;
        debug!(%query, %point, "Geocoded place");

        Ok(point)
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(&self, point: &GeoPoint) -> Result<String, GeocodingError> {
        let mut params = self.common_params();
        params.push(("lat", point.latitude().to_string()));
        params.push(("lon", point.longitude().to_string()));

        debug!(%point, "Reverse geocoding");

        let result: NominatimReverse = self.get_json("reverse", &params).await?;

        if let Some(error) = result.error {
            return Err(GeocodingError::NoMatch(format!("{point} ({error})")));
        }

        result
            .display_name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| GeocodingError::NoMatch(point.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(lat: &str, lon: &str) -> NominatimPlace {
        NominatimPlace {
            lat: lat.to_string(),
            lon: lon.to_string(),
            display_name: None,
        }
    }

    #[test]
    fn test_parse_place() {
        let point = NominatimGeocodingClient::parse_place(&place("28.6138954", "77.2090057"))
            .unwrap();
        assert!((point.latitude() - 28.613_895_4).abs() < 1e-9);
        assert!((point.longitude() - 77.209_005_7).abs() < 1e-9);
    }

    #[test]
    fn test_parse_place_rejects_garbage() {
        let err = NominatimGeocodingClient::parse_place(&place("north", "77.2")).unwrap_err();
        assert!(matches!(err, GeocodingError::ParseError(_)));
    }

    #[test]
    fn test_parse_place_rejects_out_of_range() {
        let err = NominatimGeocodingClient::parse_place(&place("128.6", "77.2")).unwrap_err();
        assert!(matches!(err, GeocodingError::ParseError(_)));
    }

    #[test]
    fn test_common_params_include_language() {
        let config = NominatimConfig {
            accept_language: Some("en".to_string()),
            ..NominatimConfig::default()
        };
        let client = NominatimGeocodingClient::new(&config).unwrap();
        let params = client.common_params();
        assert!(params.contains(&("format", "jsonv2".to_string())));
        assert!(params.contains(&("accept-language", "en".to_string())));
    }

    #[tokio::test]
    async fn test_empty_query_rejected_locally() {
        let client =
            NominatimGeocodingClient::new(&NominatimConfig::for_testing("http://127.0.0.1:9"))
                .unwrap();
        let err = client.geocode("   ").await.unwrap_err();
        assert!(matches!(err, GeocodingError::InvalidQuery(_)));
    }
}
