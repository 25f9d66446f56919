//! App Context

use std::sync::Arc;

use crate::{
    domain::feedback::{FeedbackService, SheetInteractionStore, SheetStoreConfig},
    gateway::{BackendConfig, HttpMenuGateway, MenuGateway},
};

/// Everything needed to wire an application context.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Menu backend connection settings.
    pub backend: BackendConfig,

    /// Sheet-backed interaction store settings.
    pub store: SheetStoreConfig,
}

/// Composition root for one application session.
///
/// Constructed once and threaded through explicitly; there is no ambient
/// global state.
#[derive(Clone)]
pub struct AppContext {
    /// Personalized menu gateway.
    pub menu: Arc<dyn MenuGateway>,

    /// Interaction feedback service.
    pub feedback: Arc<FeedbackService>,
}

impl AppContext {
    /// Build an application context from configuration.
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        let store = SheetInteractionStore::new(config.store);

        Self {
            menu: Arc::new(HttpMenuGateway::new(config.backend)),
            feedback: Arc::new(FeedbackService::new(Arc::new(store))),
        }
    }

    /// Build a context from pre-wired parts, for tests and embedding.
    #[must_use]
    pub fn new(menu: Arc<dyn MenuGateway>, feedback: Arc<FeedbackService>) -> Self {
        Self { menu, feedback }
    }
}
