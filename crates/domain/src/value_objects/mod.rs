//! Value Objects - Immutable, identity-less domain primitives

mod geo_point;
mod place_query;

pub use geo_point::{EARTH_RADIUS_KM, GeoPoint, InvalidCoordinates};
pub use place_query::PlaceQuery;
