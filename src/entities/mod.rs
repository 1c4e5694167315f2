mod credits;
mod facility;
mod location;
mod map;
mod pickup;
mod route;
mod session;

pub use credits::{EWasteItem, ItemList};
pub use facility::{Facility, PickupTeam, E_WASTE_CENTER, FACILITY_LOCATION, PICKUP_TEAM};
pub use location::{
    Coordinate, Coordinates, LocationSource, PositionError, PositionErrorCode, PositionResult,
};
pub use map::{Icon, MapView, Marker, MarkerKind, TileLayer, DEFAULT_ZOOM};
pub use pickup::{Confirmation, PickupInput, PickupRequest, Receipt, Redirect};
pub use route::{Route, RoutePath, RouteRequest};
pub use session::Session;
