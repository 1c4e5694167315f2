mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::API;
use crate::error::{server_error, Error};
use crate::server::handlers::{facility, locations, maps, pickups, receipts, routes, sessions};

pub(crate) type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/facility", get(facility::find))
        .route("/sessions", post(sessions::create))
        .route("/sessions/:id", get(sessions::find).delete(sessions::delete))
        .route("/sessions/:id/location", post(locations::create))
        .route("/sessions/:id/map", get(maps::find))
        .route("/sessions/:id/map/clicks", post(maps::click))
        .route("/sessions/:id/routes/facility", post(routes::to_facility))
        .route("/sessions/:id/pickups", post(pickups::confirm))
        .route("/receipts/:id", get(receipts::download))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(server_error)
}
