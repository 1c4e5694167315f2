use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::LocationAPI,
    entities::{Coordinate, LocationSource, MapView, PositionError},
    error::{position_error, Error},
};

#[async_trait]
impl LocationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn locate_user(
        &self,
        session_id: Uuid,
        source: LocationSource,
    ) -> Result<Option<MapView>, Error> {
        let shared = self.session(session_id).await?;

        let location = match source {
            LocationSource::Device { result } => {
                let result: Result<Coordinate, PositionError> = result.into();
                result.map_err(|err| {
                    position_error(&format!("code {}: {}", err.code_number(), err.message))
                })?
            }
            LocationSource::Manual {
                latitude,
                longitude,
            } => match Coordinate::parse_manual(latitude.as_deref(), longitude.as_deref()) {
                Some(location) => location,
                None => {
                    tracing::info!("incomplete manual entry, leaving map untouched");
                    return Ok(None);
                }
            },
        };

        let mut session = shared.lock().await;
        let map = session.locate(location, self.config.tile_layer.clone());

        tracing::info!(%location, "map initialized");

        Ok(Some(map.clone()))
    }
}
