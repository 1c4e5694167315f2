use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use crate::entities::Session;
use crate::error::Error;
use crate::server::DynAPI;

pub async fn create(Extension(api): Extension<DynAPI>) -> Result<Json<Session>, Error> {
    let session = api.create_session().await?;

    Ok(session.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, Error> {
    let session = api.find_session(id).await?;

    Ok(session.into())
}

pub async fn delete(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, Error> {
    let session = api.delete_session(id).await?;

    Ok(session.into())
}
