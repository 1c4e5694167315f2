use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::MapAPI,
    entities::{Coordinate, MapView, Route, RouteRequest},
    error::{location_required_error, Error},
};

#[async_trait]
impl MapAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_map(&self, session_id: Uuid) -> Result<MapView, Error> {
        let shared = self.session(session_id).await?;
        let session = shared.lock().await;

        session.map.clone().ok_or_else(location_required_error)
    }

    #[tracing::instrument(skip(self))]
    async fn click_map(&self, session_id: Uuid, point: Coordinate) -> Result<Route, Error> {
        let shared = self.session(session_id).await?;
        let mut session = shared.lock().await;

        let origin = session.user_location()?;

        self.replace_route(&mut session, RouteRequest::between(origin, point))
            .await
    }
}
