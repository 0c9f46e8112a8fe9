//! Device location port
//!
//! One-shot request for where the user currently is.

use async_trait::async_trait;
use domain::GeoPoint;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for obtaining the current device position
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DeviceLocationPort: Send + Sync {
    /// Current coordinates
    ///
    /// Fails with `LocationUnavailable` when the provider denies the request
    /// or cannot determine a position.
    async fn current_position(&self) -> Result<GeoPoint, ApplicationError>;

    /// Short provider name for logs
    fn provider_name(&self) -> &'static str;
}
