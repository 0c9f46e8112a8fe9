//! Geocoding integration for Waymark
//!
//! Provides place-name geocoding (forward and reverse) via
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org) and an
//! approximate device position via [ip-api.com](https://ip-api.com).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`GeocodingClient`] defines
//! forward and reverse lookups, implemented by [`NominatimGeocodingClient`].
//! [`PositionClient`] reports the current position, implemented by
//! [`IpApiClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
//!
//! let client = NominatimGeocodingClient::new(&NominatimConfig::default())?;
//! let delhi = client.geocode("New Delhi").await?;
//! let name = client.reverse_geocode(&delhi).await?;
//! ```

mod config;
mod error;
mod ip_location;
mod models;
mod nominatim;

pub use config::{IpLocationConfig, NominatimConfig};
pub use error::GeocodingError;
pub use ip_location::{IpApiClient, PositionClient};
pub use models::{IpApiResponse, NominatimPlace, NominatimReverse};
pub use nominatim::{GeocodingClient, NominatimGeocodingClient};
