//! Route search state and its transitions
//!
//! Everything a front end shows about a search lives in [`RouteState`]. The
//! state is only changed by [`RouteState::apply`], which takes the current
//! value and an event and returns the next value.

use serde::Serialize;

use super::map_overlay::{MapDefaults, MapOverlay};
use super::route_result::RouteResult;
use crate::value_objects::GeoPoint;

/// Everything that can happen to a route search
#[derive(Debug, Clone, PartialEq)]
pub enum RouteEvent {
    /// User edited the start field
    StartInputChanged(String),
    /// User edited the destination field
    DestinationInputChanged(String),
    /// A search was handed off to the planner
    SearchStarted,
    /// Both endpoints resolved
    RouteResolved(RouteResult),
    /// The search failed; carries the message shown to the user
    SearchFailed(String),
    /// User asked to exchange start and destination
    Swapped,
    /// Device position found, with a place name when reverse lookup worked
    PositionResolved {
        /// Device coordinates
        point: GeoPoint,
        /// Human-readable place name, if any
        label: Option<String>,
    },
    /// Device position could not be obtained
    LocationFailed(String),
}

/// Snapshot of a route search as shown to the user
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteState {
    /// Text in the start field
    pub start_input: String,
    /// Text in the destination field
    pub destination_input: String,
    /// Start marker, if resolved
    pub start_point: Option<GeoPoint>,
    /// Destination marker, if resolved
    pub destination_point: Option<GeoPoint>,
    /// Last complete result
    pub route: Option<RouteResult>,
    /// Start marker came from the device position and still matches the
    /// start field, so a search can use it without geocoding the start
    pub start_located: bool,
    /// Searches and location requests started but not yet finished
    pub pending_requests: u32,
    /// Message from the last failed action
    pub last_error: Option<String>,
}

impl RouteState {
    /// Create an empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next state for `event`
    #[must_use]
    pub fn apply(self, event: RouteEvent) -> Self {
        match event {
            RouteEvent::StartInputChanged(text) => Self {
                start_input: text,
                start_located: false,
                ..self
            },
            RouteEvent::DestinationInputChanged(text) => Self {
                destination_input: text,
                ..self
            },
            RouteEvent::SearchStarted => Self {
                pending_requests: self.pending_requests.saturating_add(1),
                last_error: None,
                ..self
            },
            RouteEvent::RouteResolved(route) => Self {
                start_point: Some(route.start().point),
                destination_point: Some(route.destination().point),
                route: Some(route),
                pending_requests: self.pending_requests.saturating_sub(1),
                last_error: None,
                ..self
            },
            RouteEvent::SearchFailed(message) | RouteEvent::LocationFailed(message) => Self {
                pending_requests: self.pending_requests.saturating_sub(1),
                last_error: Some(message),
                ..self
            },
            RouteEvent::Swapped => Self {
                start_input: self.destination_input,
                destination_input: self.start_input,
                start_point: self.destination_point,
                destination_point: self.start_point,
                route: self.route.map(RouteResult::swapped),
                start_located: false,
                ..self
            },
            RouteEvent::PositionResolved { point, label } => Self {
                start_input: label.unwrap_or(self.start_input),
                start_point: Some(point),
                start_located: true,
                route: None,
                pending_requests: self.pending_requests.saturating_sub(1),
                last_error: None,
                ..self
            },
        }
    }

    /// Whether any search or location request is still outstanding
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.pending_requests > 0
    }

    /// Project the state onto a map overlay
    #[must_use]
    pub fn map_overlay(&self, defaults: MapDefaults) -> MapOverlay {
        MapOverlay::from_points(self.start_point, self.destination_point, defaults)
    }

    /// Distance text when a complete route is present
    #[must_use]
    pub fn distance_text(&self) -> Option<String> {
        self.route
            .as_ref()
            .map(|route| format!("Distance: {}", route.format_distance()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::route_result::RouteEndpoint;

    fn delhi() -> GeoPoint {
        GeoPoint::new(28.6139, 77.2090).unwrap()
    }

    fn mumbai() -> GeoPoint {
        GeoPoint::new(19.0760, 72.8777).unwrap()
    }

    fn resolved_route() -> RouteResult {
        RouteResult::new(
            RouteEndpoint::new("Delhi", delhi()),
            RouteEndpoint::new("Mumbai", mumbai()),
        )
    }

    fn state_with_route() -> RouteState {
        RouteState::new()
            .apply(RouteEvent::StartInputChanged("Delhi".to_string()))
            .apply(RouteEvent::DestinationInputChanged("Mumbai".to_string()))
            .apply(RouteEvent::SearchStarted)
            .apply(RouteEvent::RouteResolved(resolved_route()))
    }

    #[test]
    fn input_events_update_text_only() {
        let state = RouteState::new()
            .apply(RouteEvent::StartInputChanged("Pune".to_string()))
            .apply(RouteEvent::DestinationInputChanged("Goa".to_string()));
        assert_eq!(state.start_input, "Pune");
        assert_eq!(state.destination_input, "Goa");
        assert!(state.route.is_none());
        assert!(state.start_point.is_none());
    }

    #[test]
    fn resolved_route_sets_markers_and_distance() {
        let state = state_with_route();
        assert!(!state.is_searching());
        assert_eq!(state.start_point, Some(delhi()));
        assert_eq!(state.destination_point, Some(mumbai()));
        assert_eq!(state.distance_text().as_deref(), Some("Distance: 1148.09 km"));
        assert!(state.last_error.is_none());
    }

    #[test]
    fn failure_keeps_previous_route() {
        let before = state_with_route();
        let after = before
            .clone()
            .apply(RouteEvent::SearchStarted)
            .apply(RouteEvent::SearchFailed("Location not found: Atlantis".to_string()));

        assert_eq!(after.route, before.route);
        assert_eq!(after.start_point, before.start_point);
        assert_eq!(after.destination_point, before.destination_point);
        assert_eq!(
            after.last_error.as_deref(),
            Some("Location not found: Atlantis")
        );
        assert!(!after.is_searching());
    }

    #[test]
    fn search_started_clears_error() {
        let state = RouteState::new()
            .apply(RouteEvent::SearchFailed("boom".to_string()))
            .apply(RouteEvent::SearchStarted);
        assert!(state.is_searching());
        assert!(state.last_error.is_none());
    }

    #[test]
    fn swap_exchanges_inputs_points_and_route() {
        let before = state_with_route();
        let distance = before.route.as_ref().unwrap().distance_km();

        let after = before.apply(RouteEvent::Swapped);
        assert_eq!(after.start_input, "Mumbai");
        assert_eq!(after.destination_input, "Delhi");
        assert_eq!(after.start_point, Some(mumbai()));
        assert_eq!(after.destination_point, Some(delhi()));

        let route = after.route.unwrap();
        assert_eq!(route.start().label, "Mumbai");
        assert_eq!(route.distance_km().to_bits(), distance.to_bits());
    }

    #[test]
    fn swap_without_route_only_moves_text() {
        let state = RouteState::new()
            .apply(RouteEvent::StartInputChanged("A".to_string()))
            .apply(RouteEvent::Swapped);
        assert_eq!(state.start_input, "");
        assert_eq!(state.destination_input, "A");
        assert!(state.route.is_none());
    }

    #[test]
    fn position_with_label_fills_start_and_clears_route() {
        let here = GeoPoint::new(18.5204, 73.8567).unwrap();
        let state = state_with_route().apply(RouteEvent::PositionResolved {
            point: here,
            label: Some("Pune, Maharashtra, India".to_string()),
        });
        assert_eq!(state.start_input, "Pune, Maharashtra, India");
        assert_eq!(state.start_point, Some(here));
        assert_eq!(state.destination_point, Some(mumbai()));
        assert!(state.route.is_none());
    }

    #[test]
    fn position_without_label_keeps_start_text() {
        let here = GeoPoint::new(18.5204, 73.8567).unwrap();
        let state = RouteState::new()
            .apply(RouteEvent::StartInputChanged("typed".to_string()))
            .apply(RouteEvent::PositionResolved {
                point: here,
                label: None,
            });
        assert_eq!(state.start_input, "typed");
        assert_eq!(state.start_point, Some(here));
        assert!(state.start_located);
    }

    #[test]
    fn editing_start_forgets_located_position() {
        let here = GeoPoint::new(18.5204, 73.8567).unwrap();
        let located = RouteState::new().apply(RouteEvent::PositionResolved {
            point: here,
            label: None,
        });
        assert!(located.start_located);

        let edited = located
            .clone()
            .apply(RouteEvent::StartInputChanged("Delhi".to_string()));
        assert!(!edited.start_located);

        let kept = located
            .clone()
            .apply(RouteEvent::DestinationInputChanged("Mumbai".to_string()));
        assert!(kept.start_located);

        let swapped = located.apply(RouteEvent::Swapped);
        assert!(!swapped.start_located);
        assert_eq!(swapped.destination_point, Some(here));
    }

    #[test]
    fn overlapping_searches_stay_searching_until_last_finishes() {
        let state = RouteState::new()
            .apply(RouteEvent::SearchStarted)
            .apply(RouteEvent::SearchStarted)
            .apply(RouteEvent::RouteResolved(resolved_route()));
        assert!(state.is_searching());
        assert!(state.route.is_some());

        let state = state.apply(RouteEvent::SearchFailed("boom".to_string()));
        assert!(!state.is_searching());
        assert_eq!(state.pending_requests, 0);
    }

    #[test]
    fn stray_completion_does_not_underflow() {
        let state = RouteState::new().apply(RouteEvent::SearchFailed("boom".to_string()));
        assert_eq!(state.pending_requests, 0);
        assert!(!state.is_searching());
    }

    #[test]
    fn location_failure_records_error() {
        let state = RouteState::new()
            .apply(RouteEvent::LocationFailed("Location unavailable".to_string()));
        assert_eq!(state.last_error.as_deref(), Some("Location unavailable"));
        assert!(state.start_point.is_none());
    }

    #[test]
    fn overlay_follows_state() {
        let defaults = MapDefaults::default();
        assert!(RouteState::new().map_overlay(defaults).is_empty());

        let overlay = state_with_route().map_overlay(defaults);
        assert_eq!(overlay.markers.len(), 2);
        assert!(overlay.line.is_some());
    }
}
