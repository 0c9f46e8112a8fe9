//! What a map surface needs to draw the current route

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoPoint;

/// Default map centre (geographic centre of India)
pub const DEFAULT_MAP_CENTER: GeoPoint = GeoPoint::new_unchecked(20.5937, 78.9629);

/// Default zoom level
pub const DEFAULT_MAP_ZOOM: u8 = 5;

/// Centre and zoom used when nothing has been placed on the map yet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapDefaults {
    /// Initial centre
    pub center: GeoPoint,
    /// Initial zoom
    pub zoom: u8,
}

impl Default for MapDefaults {
    fn default() -> Self {
        Self {
            center: DEFAULT_MAP_CENTER,
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

/// Which end of the route a marker belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRole {
    /// Start marker
    Start,
    /// Destination marker
    Destination,
}

impl MarkerRole {
    /// Popup text shown on the marker
    #[must_use]
    pub const fn popup(&self) -> &'static str {
        match self {
            Self::Start => "Start Location",
            Self::Destination => "Destination",
        }
    }
}

/// A single map marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    /// Start or destination
    pub role: MarkerRole,
    /// Marker position
    pub point: GeoPoint,
}

/// Overlay handed to a rendering surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOverlay {
    /// Map centre
    pub center: GeoPoint,
    /// Zoom level
    pub zoom: u8,
    /// Zero, one or two markers
    pub markers: Vec<MapMarker>,
    /// Straight line between start and destination, present only with both
    pub line: Option<[GeoPoint; 2]>,
}

impl MapOverlay {
    /// Build the overlay from whichever endpoints are known
    #[must_use]
    pub fn from_points(
        start: Option<GeoPoint>,
        destination: Option<GeoPoint>,
        defaults: MapDefaults,
    ) -> Self {
        let markers: Vec<MapMarker> = [
            start.map(|point| MapMarker {
                role: MarkerRole::Start,
                point,
            }),
            destination.map(|point| MapMarker {
                role: MarkerRole::Destination,
                point,
            }),
        ]
        .into_iter()
        .flatten()
        .collect();

        let line = start.zip(destination).map(|(a, b)| [a, b]);
        let center = markers.first().map_or(defaults.center, |m| m.point);

        Self {
            center,
            zoom: defaults.zoom,
            markers,
            line,
        }
    }

    /// Whether anything besides the base map would be drawn
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
