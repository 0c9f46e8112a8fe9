//! Interactive route session
//!
//! Holds the one [`RouteState`] a front end renders. Front-end actions turn
//! into events; actions that need the network are handed to a spawned task,
//! and a single completion handler per action turns the outcome into either
//! a success or a failure event. Concurrent searches are not deduplicated:
//! whichever finishes last determines the state.
//!
//! A start placed by [`RouteSession::locate`] is used as is until the start
//! field is edited, so a position whose reverse lookup failed can still be
//! measured from.

use std::sync::Arc;

use domain::{MapDefaults, MapOverlay, RouteEndpoint, RouteEvent, RouteResult, RouteState};
use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::route_planner::{LocatedPosition, RoutePlanner};

/// Start label when the device position has no place name
const CURRENT_LOCATION_LABEL: &str = "Current Location";
use crate::error::ApplicationError;

/// Shared route search state plus the planner that feeds it
#[derive(Debug, Clone)]
pub struct RouteSession {
    planner: Arc<RoutePlanner>,
    state: Arc<RwLock<RouteState>>,
    map_defaults: MapDefaults,
}

impl RouteSession {
    /// Create a session with an empty state
    #[must_use]
    pub fn new(planner: Arc<RoutePlanner>) -> Self {
        Self {
            planner,
            state: Arc::new(RwLock::new(RouteState::new())),
            map_defaults: MapDefaults::default(),
        }
    }

    /// Override the map centre and zoom used when nothing is placed
    #[must_use]
    pub const fn with_map_defaults(mut self, defaults: MapDefaults) -> Self {
        self.map_defaults = defaults;
        self
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> RouteState {
        self.state.read().clone()
    }

    /// Overlay for the current state
    #[must_use]
    pub fn map_overlay(&self) -> MapOverlay {
        self.state.read().map_overlay(self.map_defaults)
    }

    /// Apply an event and return the resulting state
    pub fn dispatch(&self, event: RouteEvent) -> RouteState {
        let mut guard = self.state.write();
        let next = std::mem::take(&mut *guard).apply(event);
        *guard = next.clone();
        next
    }

    /// Replace the start field text
    pub fn set_start_input(&self, text: impl Into<String>) -> RouteState {
        self.dispatch(RouteEvent::StartInputChanged(text.into()))
    }

    /// Replace the destination field text
    pub fn set_destination_input(&self, text: impl Into<String>) -> RouteState {
        self.dispatch(RouteEvent::DestinationInputChanged(text.into()))
    }

    /// Exchange start and destination
    pub fn switch_locations(&self) -> RouteState {
        self.dispatch(RouteEvent::Swapped)
    }

    /// Start a search for the current inputs
    ///
    /// The returned handle completes once the state has been updated.
    pub fn find_route(&self) -> JoinHandle<()> {
        let request = self.dispatch(RouteEvent::SearchStarted);
        let session = self.clone();

        tokio::spawn(async move {
            let outcome = match located_start(&request) {
                Some(start) => {
                    session
                        .planner
                        .plan_route_from(start, &request.destination_input)
                        .await
                },
                None => {
                    session
                        .planner
                        .plan_route(&request.start_input, &request.destination_input)
                        .await
                },
            };
            session.complete_search(outcome);
        })
    }

    /// Apply the outcome of a route search
    pub fn complete_search(
        &self,
        outcome: Result<RouteResult, ApplicationError>,
    ) -> RouteState {
        let event = match outcome {
            Ok(route) => {
                debug!(distance_km = route.distance_km(), "Search completed");
                RouteEvent::RouteResolved(route)
            },
            Err(e) => {
                warn!(error = %e, "Search failed");
                RouteEvent::SearchFailed(e.user_message())
            },
        };
        self.dispatch(event)
    }

    /// Start a device location request
    pub fn locate(&self) -> JoinHandle<()> {
        self.dispatch(RouteEvent::SearchStarted);
        let session = self.clone();

        tokio::spawn(async move {
            let outcome = session.planner.locate_current_position().await;
            session.complete_locate(outcome);
        })
    }

    /// Apply the outcome of a device location request
    pub fn complete_locate(
        &self,
        outcome: Result<LocatedPosition, ApplicationError>,
    ) -> RouteState {
        let event = match outcome {
            Ok(LocatedPosition { point, label }) => RouteEvent::PositionResolved { point, label },
            Err(e) => {
                warn!(error = %e, "Location request failed");
                RouteEvent::LocationFailed(e.user_message())
            },
        };
        self.dispatch(event)
    }
}

/// Start endpoint to reuse when the start marker is the device position
fn located_start(state: &RouteState) -> Option<RouteEndpoint> {
    if !state.start_located {
        return None;
    }
    let point = state.start_point?;
    let label = match state.start_input.trim() {
        "" => CURRENT_LOCATION_LABEL,
        text => text,
    };
    Some(RouteEndpoint::new(label, point))
}
