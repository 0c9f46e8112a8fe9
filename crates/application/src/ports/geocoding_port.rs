//! Geocoding service port
//!
//! Translates place names to coordinates and back. Adapters in the
//! infrastructure layer implement this port on top of a geocoding API.

use async_trait::async_trait;
use domain::{GeoPoint, PlaceQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forward and reverse geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place name to the coordinates of its best match
    ///
    /// Fails with `NotFound` when the service has no match and with
    /// `ServiceError` on transport or parse failures.
    async fn forward(&self, query: &PlaceQuery) -> Result<GeoPoint, ApplicationError>;

    /// Resolve coordinates to a human-readable place name
    async fn reverse(&self, point: &GeoPoint) -> Result<String, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocodingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }

    #[tokio::test]
    async fn mock_forward_returns_configured_point() {
        let mut mock = MockGeocodingPort::new();
        mock.expect_forward()
            .withf(|q| q.as_str() == "Delhi")
            .returning(|_| Ok(GeoPoint::new_unchecked(28.6139, 77.209)));

        let query = PlaceQuery::new("Delhi").unwrap();
        let point = mock.forward(&query).await.unwrap();
        assert!((point.latitude() - 28.6139).abs() < f64::EPSILON);
    }
}
