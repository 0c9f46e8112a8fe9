//! Resolved route between two places

use serde::Serialize;

use crate::value_objects::GeoPoint;

/// One resolved end of a route: what the user typed and where it landed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEndpoint {
    /// Display text for this endpoint
    pub label: String,
    /// Resolved coordinates
    pub point: GeoPoint,
}

impl RouteEndpoint {
    /// Create a new endpoint
    #[must_use]
    pub fn new(label: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            label: label.into(),
            point,
        }
    }
}

/// Both endpoints plus their great-circle distance
///
/// Only ever built from two resolved endpoints, so a value of this type is
/// always complete and its distance always matches its endpoints. It is
/// serialized for output but never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    start: RouteEndpoint,
    destination: RouteEndpoint,
    distance_km: f64,
}

impl RouteResult {
    /// Build a result, computing the haversine distance rounded to 2 decimals
    #[must_use]
    pub fn new(start: RouteEndpoint, destination: RouteEndpoint) -> Self {
        let distance_km = round_to_hundredths(start.point.distance_km(&destination.point));
        Self {
            start,
            destination,
            distance_km,
        }
    }

    /// Start endpoint
    #[must_use]
    pub const fn start(&self) -> &RouteEndpoint {
        &self.start
    }

    /// Destination endpoint
    #[must_use]
    pub const fn destination(&self) -> &RouteEndpoint {
        &self.destination
    }

    /// Distance in kilometers, rounded to 2 decimal places
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Exchange start and destination
    ///
    /// The distance is carried over unchanged.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            start: self.destination,
            destination: self.start,
            distance_km: self.distance_km,
        }
    }

    /// Distance formatted the way it is shown to users (`"1148.09 km"`)
    #[must_use]
    pub fn format_distance(&self) -> String {
        format!("{:.2} km", self.distance_km)
    }
}

/// Round to two decimal places, half away from zero
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
