use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use crate::entities::{Coordinate, MapView, Route};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<MapView>, Error> {
    let map = api.find_map(id).await?;

    Ok(map.into())
}

pub async fn click(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(point): Json<Coordinate>,
) -> Result<Json<Route>, Error> {
    let route = api.click_map(id, point).await?;

    Ok(route.into())
}
