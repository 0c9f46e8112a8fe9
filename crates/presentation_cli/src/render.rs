//! Text and JSON rendering of session state

use domain::{GeoPoint, MapOverlay, RouteResult, RouteState};
use serde::Serialize;

/// Machine-readable output of `route` and `locate`
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Start field text
    pub start: &'a str,
    /// Destination field text
    pub destination: &'a str,
    /// Complete result, if any
    pub route: Option<&'a RouteResult>,
    /// "Distance: X km" when a result is present
    pub distance_text: Option<String>,
    /// Map projection of the state
    pub map: &'a MapOverlay,
}

impl<'a> Report<'a> {
    pub fn new(state: &'a RouteState, map: &'a MapOverlay) -> Self {
        Self {
            start: &state.start_input,
            destination: &state.destination_input,
            route: state.route.as_ref(),
            distance_text: state.distance_text(),
            map,
        }
    }
}

fn endpoint_line(icon: &str, name: &str, label: &str, point: Option<GeoPoint>) -> String {
    match point {
        Some(point) => format!("{icon} {name}: {label} ({point})"),
        None => format!("{icon} {name}: {label}"),
    }
}

/// Human-readable map overlay
pub fn map_lines(map: &MapOverlay) -> Vec<String> {
    let mut lines = vec![format!("🗺️  Map centre {} at zoom {}", map.center, map.zoom)];
    for marker in &map.markers {
        lines.push(format!("   • {} @ {}", marker.role.popup(), marker.point));
    }
    if map.line.is_some() {
        lines.push("   • Line between start and destination".to_string());
    }
    lines
}

/// Human-readable route search state
pub fn route_lines(state: &RouteState, map: &MapOverlay) -> Vec<String> {
    let mut lines = vec![
        endpoint_line("📍", "Start", &state.start_input, state.start_point),
        endpoint_line(
            "🏁",
            "Destination",
            &state.destination_input,
            state.destination_point,
        ),
    ];
    if let Some(distance) = state.distance_text() {
        lines.push(format!("📏 {distance}"));
    }
    lines.extend(map_lines(map));
    lines
}

/// Human-readable located position
pub fn location_lines(state: &RouteState, map: &MapOverlay) -> Vec<String> {
    let label = if state.start_input.is_empty() {
        "(no place name)"
    } else {
        state.start_input.as_str()
    };
    let mut lines = vec![endpoint_line(
        "📡",
        "Current location",
        label,
        state.start_point,
    )];
    lines.extend(map_lines(map));
    lines
}
