//! Application services
//!
//! Use cases built on top of the ports.

mod route_planner;
mod route_session;

pub use route_planner::{LocatedPosition, LookupMode, RoutePlanner};
pub use route_session::RouteSession;
