use super::Engine;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    api::SessionAPI,
    entities::Session,
    error::{not_found_error, Error},
};

#[async_trait]
impl SessionAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_session(&self) -> Result<Session, Error> {
        let session = Session::new();

        self.sessions
            .lock()
            .await
            .insert(session.id, Arc::new(Mutex::new(session.clone())));

        tracing::info!(session_id = %session.id, "session created");

        Ok(session)
    }

    #[tracing::instrument(skip(self))]
    async fn find_session(&self, id: Uuid) -> Result<Session, Error> {
        let shared = self.session(id).await?;
        let session = shared.lock().await;

        Ok(session.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_session(&self, id: Uuid) -> Result<Session, Error> {
        let shared = self
            .sessions
            .lock()
            .await
            .remove(&id)
            .ok_or_else(not_found_error)?;
        let session = shared.lock().await.clone();

        tracing::info!(session_id = %session.id, "session ended");

        Ok(session)
    }
}
