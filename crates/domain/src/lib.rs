//! Domain layer for Waymark
//!
//! Contains the place/point value objects, the route result, the search
//! state machine and the map overlay projection. No I/O happens here.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
