//! Route planning
//!
//! Resolves a start and a destination name through the geocoding port and
//! measures the great-circle distance between them.

use std::fmt;
use std::sync::Arc;

use domain::{GeoPoint, PlaceQuery, RouteEndpoint, RouteResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{DeviceLocationPort, GeocodingPort};

/// How the two forward lookups of a route are issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    /// Both lookups in flight at once
    #[default]
    Concurrent,
    /// Start first, then destination
    Sequential,
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concurrent => write!(f, "concurrent"),
            Self::Sequential => write!(f, "sequential"),
        }
    }
}

/// Device position plus its place name when reverse lookup succeeded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatedPosition {
    /// Device coordinates
    pub point: GeoPoint,
    /// Place name, `None` when reverse lookup failed
    pub label: Option<String>,
}

/// Orchestrates geocoding lookups and distance computation
pub struct RoutePlanner {
    geocoder: Arc<dyn GeocodingPort>,
    device_location: Option<Arc<dyn DeviceLocationPort>>,
    lookup_mode: LookupMode,
}

impl fmt::Debug for RoutePlanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutePlanner")
            .field(
                "device_location",
                &self.device_location.as_ref().map(|p| p.provider_name()),
            )
            .field("lookup_mode", &self.lookup_mode)
            .finish_non_exhaustive()
    }
}

impl RoutePlanner {
    /// Create a planner with no device location provider
    #[must_use]
    pub fn new(geocoder: Arc<dyn GeocodingPort>) -> Self {
        Self {
            geocoder,
            device_location: None,
            lookup_mode: LookupMode::default(),
        }
    }

    /// Attach a device location provider
    #[must_use]
    pub fn with_device_location(mut self, provider: Arc<dyn DeviceLocationPort>) -> Self {
        self.device_location = Some(provider);
        self
    }

    /// Choose how the two forward lookups are issued
    #[must_use]
    pub const fn with_lookup_mode(mut self, mode: LookupMode) -> Self {
        self.lookup_mode = mode;
        self
    }

    /// Resolve both places and compute the distance between them
    ///
    /// Empty input is rejected before any lookup. Both lookups always run to
    /// completion; if either fails the start error takes precedence and no
    /// result is produced.
    #[instrument(skip(self))]
    pub async fn plan_route(
        &self,
        start: &str,
        destination: &str,
    ) -> Result<RouteResult, ApplicationError> {
        let start_query = PlaceQuery::new(start)
            .map_err(|_| ApplicationError::InvalidInput("start location is empty".to_string()))?;
        let destination_query = PlaceQuery::new(destination)
            .map_err(|_| ApplicationError::InvalidInput("destination is empty".to_string()))?;

        debug!(mode = %self.lookup_mode, "Resolving route endpoints");

        let (start_result, destination_result) = match self.lookup_mode {
            LookupMode::Concurrent => {
                futures::future::join(
                    self.geocoder.forward(&start_query),
                    self.geocoder.forward(&destination_query),
                )
                .await
            },
            LookupMode::Sequential => {
                let start_result = self.geocoder.forward(&start_query).await;
                let destination_result = self.geocoder.forward(&destination_query).await;
                (start_result, destination_result)
            },
        };

        if let Err(ref e) = start_result {
            warn!(query = %start_query, error = %e, "Start lookup failed");
        }
        if let Err(ref e) = destination_result {
            warn!(query = %destination_query, error = %e, "Destination lookup failed");
        }

        let start_point = start_result?;
        let destination_point = destination_result?;

        let route = RouteResult::new(
            RouteEndpoint::new(start_query.into_inner(), start_point),
            RouteEndpoint::new(destination_query.into_inner(), destination_point),
        );

        info!(
            start = %route.start().point,
            destination = %route.destination().point,
            distance_km = route.distance_km(),
            "Route planned"
        );

        Ok(route)
    }

    /// Measure from an already resolved start to a named destination
    ///
    /// Only the destination is geocoded. Used when the start is the device
    /// position, which may have no place name to look up.
    #[instrument(skip(self, start), fields(start = %start.point))]
    pub async fn plan_route_from(
        &self,
        start: RouteEndpoint,
        destination: &str,
    ) -> Result<RouteResult, ApplicationError> {
        let destination_query = PlaceQuery::new(destination)
            .map_err(|_| ApplicationError::InvalidInput("destination is empty".to_string()))?;

        let destination_point = self
            .geocoder
            .forward(&destination_query)
            .await
            .inspect_err(|e| {
                warn!(query = %destination_query, error = %e, "Destination lookup failed");
            })?;

        let route = RouteResult::new(
            start,
            RouteEndpoint::new(destination_query.into_inner(), destination_point),
        );

        info!(
            destination = %route.destination().point,
            distance_km = route.distance_km(),
            "Route planned from located start"
        );

        Ok(route)
    }

    /// Exchange start and destination of a result without recomputing
    #[must_use]
    pub fn swap(route: RouteResult) -> RouteResult {
        route.swapped()
    }

    /// Obtain the device position and, best effort, its place name
    #[instrument(skip(self))]
    pub async fn locate_current_position(&self) -> Result<LocatedPosition, ApplicationError> {
        let Some(provider) = self.device_location.as_ref() else {
            return Err(ApplicationError::LocationUnavailable(
                "no location provider configured".to_string(),
            ));
        };

        let point = provider.current_position().await.map_err(|e| match e {
            ApplicationError::LocationUnavailable(_) => e,
            other => ApplicationError::LocationUnavailable(other.to_string()),
        })?;

        debug!(provider = provider.provider_name(), %point, "Device position obtained");

        let label = match self.geocoder.reverse(&point).await {
            Ok(name) => Some(name),
            Err(e) => {
                warn!(%point, error = %e, "Reverse lookup failed, keeping position without a name");
                None
            },
        };

        Ok(LocatedPosition { point, label })
    }

    /// Forward-geocode a single place name
    #[instrument(skip(self))]
    pub async fn resolve(&self, query: &str) -> Result<GeoPoint, ApplicationError> {
        let query = PlaceQuery::new(query)
            .map_err(|_| ApplicationError::InvalidInput("location is empty".to_string()))?;
        self.geocoder.forward(&query).await
    }

    /// Reverse-geocode a single point
    #[instrument(skip(self))]
    pub async fn describe(&self, point: &GeoPoint) -> Result<String, ApplicationError> {
        self.geocoder.reverse(point).await
    }
}
