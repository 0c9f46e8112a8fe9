//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod device_location_port;
mod geocoding_port;

pub use device_location_port::DeviceLocationPort;
#[cfg(test)]
pub use device_location_port::MockDeviceLocationPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
