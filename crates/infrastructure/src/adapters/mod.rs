//! Adapters - Port implementations backed by external services

mod device_location_adapter;
mod geocoding_adapter;

pub use device_location_adapter::{FixedLocationAdapter, IpLocationAdapter};
pub use geocoding_adapter::NominatimGeocodingAdapter;
