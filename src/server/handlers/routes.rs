use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use crate::entities::Route;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn to_facility(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Route>, Error> {
    let route = api.navigate_to_facility(id).await?;

    Ok(route.into())
}
