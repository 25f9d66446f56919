//! Feedback

pub mod models;
pub mod service;
pub mod store;

pub use models::{Interaction, InteractionAction};
pub use service::FeedbackService;
pub use store::{InteractionStore, MockInteractionStore, SheetInteractionStore, SheetStoreConfig};
