//! IP-based position lookup
//!
//! Approximates where this machine is from its public IP address using
//! [ip-api.com](https://ip-api.com). Accuracy is city-level at best.

use std::time::Duration;

use async_trait::async_trait;
use domain::GeoPoint;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::IpLocationConfig;
use crate::error::GeocodingError;
use crate::models::IpApiResponse;

/// Trait for clients that can report the current position
#[async_trait]
pub trait PositionClient: Send + Sync {
    /// Current approximate position
    async fn current_position(&self) -> Result<GeoPoint, GeocodingError>;
}

/// ip-api.com client
#[derive(Debug)]
pub struct IpApiClient {
    client: Client,
    config: IpLocationConfig,
}

impl IpApiClient {
    /// Create a new ip-api client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &IpLocationConfig) -> Result<Self, GeocodingError> {
        let mut builder = Client::builder();
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
}

#[async_trait]
impl PositionClient for IpApiClient {
    #[instrument(skip(self))]
    async fn current_position(&self) -> Result<GeoPoint, GeocodingError> {
        let url = format!("{}/json/", self.config.base_url.trim_end_matches('/'));

        debug!(%url, "Requesting IP position");

        let response = self
            .client
            .get(&url)
            .query(&[("fields", "status,message,lat,lon")])
            .send()
            .await
            .map_err(|e| GeocodingError::from_transport(&e))?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        if !body.is_success() {
            return Err(GeocodingError::LocationDenied(
                body.message.unwrap_or_else(|| "lookup failed".to_string()),
            ));
        }

        let (Some(lat), Some(lon)) = (body.lat, body.lon) else {
            return Err(GeocodingError::ParseError(
                "Response missing lat/lon".to_string(),
            ));
        };

        GeoPoint::new(lat, lon).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}
