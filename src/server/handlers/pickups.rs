use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use crate::entities::{Confirmation, PickupInput};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn confirm(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(input): Json<PickupInput>,
) -> Result<Json<Confirmation>, Error> {
    let confirmation = api.confirm_pickup(id, input).await?;

    Ok(confirmation.into())
}
