use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinate, MapView, Redirect, Route, TileLayer};
use crate::error::{location_required_error, Error};

/// Everything one user's page holds between interactions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub user_location: Option<Coordinate>,
    pub map: Option<MapView>,
    /// Whether the pickup confirmation panel is shown.
    pub controls_visible: bool,
    pub redirect: Option<Redirect>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            user_location: None,
            map: None,
            controls_visible: false,
            redirect: None,
            created_at: Utc::now(),
        }
    }

    /// Replaces the viewport (and any route on it) with one centered on `location`.
    pub fn locate(&mut self, location: Coordinate, tile_layer: TileLayer) -> &MapView {
        if let Some(previous) = self.map.as_mut().and_then(|map| map.remove_route()) {
            tracing::info!(route_id = %previous.id, "tearing down route with old map");
        }

        self.user_location = Some(location);
        self.controls_visible = false;
        self.map.insert(MapView::new(location, tile_layer))
    }

    pub fn user_location(&self) -> Result<Coordinate, Error> {
        self.user_location.ok_or_else(location_required_error)
    }

    pub fn map_mut(&mut self) -> Result<&mut MapView, Error> {
        self.map.as_mut().ok_or_else(location_required_error)
    }

    pub fn route(&self) -> Option<&Route> {
        self.map.as_ref().and_then(|map| map.route())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
