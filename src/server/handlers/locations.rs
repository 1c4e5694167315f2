use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{LocationSource, MapView};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    source: LocationSource,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Option<MapView>>, Error> {
    let map = api.locate_user(id, params.source).await?;

    Ok(map.into())
}
