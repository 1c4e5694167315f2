mod location_api;
mod map_api;
mod pickup_api;
mod route_api;
mod session_api;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    api::API,
    config::Config,
    entities::{Receipt, Session},
    error::{not_found_error, Error},
    external::RoutingService,
    receipt::DocumentRenderer,
};

/// Each session is locked on its own so one user's routing call does not
/// hold up another's.
type SharedSession = Arc<Mutex<Session>>;

pub struct Engine {
    config: Config,
    router: Arc<dyn RoutingService>,
    renderer: Arc<dyn DocumentRenderer>,
    sessions: Mutex<HashMap<Uuid, SharedSession>>,
    receipts: Mutex<HashMap<Uuid, Receipt>>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new<R, D>(config: Config, router: R, renderer: D) -> Self
    where
        R: RoutingService + 'static,
        D: DocumentRenderer + 'static,
    {
        tracing::info!(
            osrm = %config.osrm_api_base,
            logo = %config.logo_path.display(),
            "engine ready"
        );

        Self {
            config,
            router: Arc::new(router),
            renderer: Arc::new(renderer),
            sessions: Mutex::new(HashMap::new()),
            receipts: Mutex::new(HashMap::new()),
        }
    }

    async fn session(&self, id: Uuid) -> Result<SharedSession, Error> {
        self.sessions
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(not_found_error)
    }
}

impl API for Engine {}
