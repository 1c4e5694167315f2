use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Confirmation, Coordinate, LocationSource, MapView, PickupInput, Receipt, Route, Session,
};
use crate::error::Error;

#[async_trait]
pub trait SessionAPI {
    async fn create_session(&self) -> Result<Session, Error>;
    async fn find_session(&self, id: Uuid) -> Result<Session, Error>;
    async fn delete_session(&self, id: Uuid) -> Result<Session, Error>;
}

#[async_trait]
pub trait LocationAPI {
    /// Captures the user's position and initializes the map around it.
    /// `None` means manual entry was incomplete and nothing changed.
    async fn locate_user(
        &self,
        session_id: Uuid,
        source: LocationSource,
    ) -> Result<Option<MapView>, Error>;
}

#[async_trait]
pub trait MapAPI {
    async fn find_map(&self, session_id: Uuid) -> Result<MapView, Error>;
    /// Routes from the user to the clicked point, replacing any drawn route.
    async fn click_map(&self, session_id: Uuid, point: Coordinate) -> Result<Route, Error>;
}

#[async_trait]
pub trait RouteAPI {
    async fn navigate_to_facility(&self, session_id: Uuid) -> Result<Route, Error>;
}

#[async_trait]
pub trait PickupAPI {
    async fn confirm_pickup(
        &self,
        session_id: Uuid,
        input: PickupInput,
    ) -> Result<Confirmation, Error>;
    /// Hands the receipt out once; it is dropped from memory afterwards.
    async fn take_receipt(&self, id: Uuid) -> Result<Receipt, Error>;
}

pub trait API: SessionAPI + LocationAPI + MapAPI + RouteAPI + PickupAPI {}
