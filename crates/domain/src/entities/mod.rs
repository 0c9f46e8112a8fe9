//! Domain Entities - Values the rest of the system is built around

mod map_overlay;
mod route_result;
mod route_state;

pub use map_overlay::{
    DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM, MapDefaults, MapMarker, MapOverlay, MarkerRole,
};
pub use route_result::{RouteEndpoint, RouteResult, round_to_hundredths};
pub use route_state::{RouteEvent, RouteState};
