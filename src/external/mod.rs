mod osrm;

pub use osrm::OsrmClient;

use async_trait::async_trait;

use crate::entities::{RoutePath, RouteRequest};
use crate::error::Error;

/// Computes a path through an ordered list of waypoints.
#[async_trait]
pub trait RoutingService: Send + Sync {
    async fn find_route(&self, request: &RouteRequest) -> Result<RoutePath, Error>;
}
