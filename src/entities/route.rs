use chrono::{DateTime, Utc};
use geo_types::LineString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinate, FACILITY_LOCATION};

/// What gets handed to the routing service: an ordered waypoint list and
/// whether the drawn route may be dragged to reroute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub waypoints: Vec<Coordinate>,
    pub draggable: bool,
}

impl RouteRequest {
    pub fn between(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            waypoints: vec![origin, destination],
            draggable: true,
        }
    }

    pub fn to_facility(origin: Coordinate) -> Self {
        Self {
            waypoints: vec![origin, FACILITY_LOCATION],
            draggable: false,
        }
    }

    pub fn destination(&self) -> Option<&Coordinate> {
        self.waypoints.last()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    pub geometry: LineString<f64>,
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
}

/// The route currently drawn on a session's map.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub waypoints: Vec<Coordinate>,
    pub draggable: bool,
    pub path: RoutePath,
    pub created_at: DateTime<Utc>,
}

impl Route {
    pub fn new(request: RouteRequest, path: RoutePath) -> Self {
        Route {
            id: Uuid::new_v4(),
            waypoints: request.waypoints,
            draggable: request.draggable,
            path,
            created_at: Utc::now(),
        }
    }
}
