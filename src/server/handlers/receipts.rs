use axum::extract::{Extension, Path};
use axum::http::header;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::error::Error;
use crate::server::DynAPI;

pub async fn download(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let receipt = api.take_receipt(id).await?;
    let disposition = format!("attachment; filename=\"{}\"", receipt.file_name);

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        receipt.bytes,
    ))
}
