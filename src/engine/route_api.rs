use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::RouteAPI,
    entities::{Route, RouteRequest, Session},
    error::Error,
};

impl Engine {
    /// Tears down the drawn route before asking for the next one, so a
    /// session never shows two. A failed request leaves no route and the
    /// confirmation panel as it was.
    #[tracing::instrument(skip(self, session), fields(session_id = %session.id))]
    pub(super) async fn replace_route(
        &self,
        session: &mut Session,
        request: RouteRequest,
    ) -> Result<Route, Error> {
        let map = session.map_mut()?;

        if let Some(previous) = map.remove_route() {
            tracing::info!(route_id = %previous.id, "removed previous route");
        }

        let path = match self.router.find_route(&request).await {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!(%err, "routing failed");
                return Err(err);
            }
        };

        let route = Route::new(request, path);
        map.add_route(route.clone())?;
        session.controls_visible = true;

        tracing::info!(
            route_id = %route.id,
            distance = route.path.distance,
            "route drawn"
        );

        Ok(route)
    }
}

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn navigate_to_facility(&self, session_id: Uuid) -> Result<Route, Error> {
        let shared = self.session(session_id).await?;
        let mut session = shared.lock().await;

        let origin = session.user_location()?;

        self.replace_route(&mut session, RouteRequest::to_facility(origin))
            .await
    }
}
