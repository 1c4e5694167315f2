use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::PickupAPI,
    entities::{Confirmation, PickupInput, Receipt, Redirect},
    error::{not_found_error, unexpected_error, Error},
    receipt::ReceiptLayout,
};

#[async_trait]
impl PickupAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn confirm_pickup(
        &self,
        session_id: Uuid,
        input: PickupInput,
    ) -> Result<Confirmation, Error> {
        let shared = self.session(session_id).await?;
        let mut session = shared.lock().await;

        let request = input.validate(session.user_location)?;
        let layout = ReceiptLayout::for_pickup(&request, &self.config.logo_path);

        let renderer = self.renderer.clone();
        let bytes = tokio::task::spawn_blocking(move || renderer.render(&layout))
            .await
            .map_err(|_| unexpected_error())??;
        let receipt = Receipt::new(bytes);

        let redirect = Redirect::schedule(&self.config.redirect_path, self.config.redirect_delay);
        session.redirect = Some(redirect.clone());

        let confirmation = Confirmation {
            receipt_id: receipt.id,
            file_name: receipt.file_name.clone(),
            download_url: receipt.download_url(),
            credits: request.credits(),
            redirect,
        };

        self.receipts.lock().await.insert(receipt.id, receipt);

        tracing::info!(
            receipt_id = %confirmation.receipt_id,
            redirect_to = %confirmation.redirect.location,
            "pickup confirmed"
        );

        Ok(confirmation)
    }

    #[tracing::instrument(skip(self))]
    async fn take_receipt(&self, id: Uuid) -> Result<Receipt, Error> {
        let receipt = self
            .receipts
            .lock()
            .await
            .remove(&id)
            .ok_or_else(not_found_error)?;

        tracing::info!(receipt_id = %receipt.id, "receipt handed out");

        Ok(receipt)
    }
}
