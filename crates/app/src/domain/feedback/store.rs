//! Sheet-backed interaction store client.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;

use crate::domain::feedback::models::Interaction;

/// Configuration for the sheet-backed store webhook.
#[derive(Debug, Clone)]
pub struct SheetStoreConfig {
    /// Webhook address of the sheet script, e.g. an Apps Script exec URL.
    pub webhook_url: String,
}

/// Errors that can occur writing to the interaction store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store returned a non-2xx response.
    #[error("unexpected response status {0}")]
    Status(reqwest::StatusCode),
}

/// Upsert-style sink for scored interactions.
#[automock]
#[async_trait]
pub trait InteractionStore: Send + Sync {
    /// Record one interaction.
    ///
    /// Repeated identical calls re-apply the update; there is no idempotency
    /// key.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] on HTTP failure or a non-2xx response.
    async fn record(&self, interaction: Interaction) -> Result<(), StoreError>;
}

/// [`InteractionStore`] over the sheet webhook.
#[derive(Debug, Clone)]
pub struct SheetInteractionStore {
    config: SheetStoreConfig,
    http: Client,
}

impl SheetInteractionStore {
    /// Create a new store client from the given configuration.
    #[must_use]
    pub fn new(config: SheetStoreConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl InteractionStore for SheetInteractionStore {
    async fn record(&self, interaction: Interaction) -> Result<(), StoreError> {
        let body = json!({
            "action": "update_interaction",
            "customer_id": interaction.customer_id,
            "item_id": interaction.item_id,
            "score": interaction.score,
        });

        let response = self
            .http
            .post(&self.config.webhook_url)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Status(response.status()));
        }

        Ok(())
    }
}
