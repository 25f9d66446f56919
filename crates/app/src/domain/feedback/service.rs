//! Feedback service.

use std::sync::Arc;

use tracing::warn;

use crate::domain::feedback::{
    models::{Interaction, InteractionAction},
    store::InteractionStore,
};

/// Scores interactions and forwards them to the store, best-effort.
///
/// The store write is dispatched as a detached task: callers get the score
/// back immediately and never see a write failure. Failures are logged and
/// dropped; there is no retry.
#[derive(Clone)]
pub struct FeedbackService {
    store: Arc<dyn InteractionStore>,
}

impl std::fmt::Debug for FeedbackService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackService").finish_non_exhaustive()
    }
}

impl FeedbackService {
    /// Create a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn InteractionStore>) -> Self {
        Self { store }
    }

    /// Score `action` for `(customer_id, item_id)` and dispatch the store
    /// write without awaiting it.
    ///
    /// Returns the score that was recorded. Must be called from within a
    /// tokio runtime.
    pub fn track(&self, customer_id: &str, item_id: &str, action: &str) -> u8 {
        let score = InteractionAction::parse(action).score();

        let interaction = Interaction {
            customer_id: customer_id.to_string(),
            item_id: item_id.to_string(),
            score,
        };

        let store = Arc::clone(&self.store);

        tokio::spawn(async move {
            if let Err(error) = store.record(interaction).await {
                warn!("failed to record interaction: {error}");
            }
        });

        score
    }
}
