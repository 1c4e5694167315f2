use serde::{Deserialize, Serialize};

use crate::entities::{Coordinate, Route, E_WASTE_CENTER};
use crate::error::{invalid_state_error, Error};

pub const DEFAULT_ZOOM: u8 = 13;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.osm.org/{z}/{x}/{y}.png".into(),
            attribution: "© OpenStreetMap".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    pub url: String,
    pub size: [u32; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    User,
    Facility,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: Coordinate,
    pub popup: String,
    pub icon: Icon,
}

impl Marker {
    pub fn user(position: Coordinate) -> Self {
        Self {
            kind: MarkerKind::User,
            position,
            popup: "Your Location".into(),
            icon: Icon {
                url: "static/car.png".into(),
                size: [50, 50],
            },
        }
    }

    pub fn facility() -> Self {
        Self {
            kind: MarkerKind::Facility,
            position: E_WASTE_CENTER.location,
            popup: E_WASTE_CENTER.name.into(),
            icon: Icon {
                url: "static/recycle.png".into(),
                size: [35, 35],
            },
        }
    }
}

/// A map viewport centered on the user, with at most one drawn route.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub tile_layer: TileLayer,
    pub markers: Vec<Marker>,
    route: Option<Route>,
}

impl MapView {
    pub fn new(center: Coordinate, tile_layer: TileLayer) -> Self {
        Self {
            center,
            zoom: DEFAULT_ZOOM,
            tile_layer,
            markers: vec![Marker::user(center), Marker::facility()],
            route: None,
        }
    }

    pub fn user_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.kind == MarkerKind::User)
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn remove_route(&mut self) -> Option<Route> {
        self.route.take()
    }

    /// Fails if a route is still drawn; callers remove the old one first.
    pub fn add_route(&mut self, route: Route) -> Result<(), Error> {
        if self.route.is_some() {
            return Err(invalid_state_error());
        }

        self.route = Some(route);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{RoutePath, RouteRequest, FACILITY_LOCATION};
    use geo_types::LineString;

    fn route(from: Coordinate, to: Coordinate) -> Route {
        let path = RoutePath {
            geometry: LineString::from(vec![(from.longitude(), from.latitude())]),
            distance: 0.0,
            duration: 0.0,
        };

        Route::new(RouteRequest::between(from, to), path)
    }

    #[test]
    fn places_user_and_facility_markers() {
        let center = Coordinate::new(12.90, 77.60).unwrap();
        let map = MapView::new(center, TileLayer::default());

        assert_eq!(map.zoom, 13);
        assert_eq!(map.markers.len(), 2);
        assert_eq!(map.user_marker().unwrap().position, center);
        assert_eq!(map.markers[1].position, FACILITY_LOCATION);
        assert_eq!(map.markers[1].popup, "E-Waste Center");
    }

    #[test]
    fn refuses_a_second_route() {
        let center = Coordinate::new(12.90, 77.60).unwrap();
        let other = Coordinate::new(12.95, 77.55).unwrap();
        let mut map = MapView::new(center, TileLayer::default());

        map.add_route(route(center, other)).unwrap();
        assert!(map.add_route(route(center, other)).is_err());

        assert!(map.remove_route().is_some());
        assert!(map.add_route(route(center, other)).is_ok());
    }
}
