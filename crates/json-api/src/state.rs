//! State

use std::sync::Arc;

use tableside_app::domain::feedback::FeedbackService;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) feedback: Arc<FeedbackService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(feedback: Arc<FeedbackService>) -> Self {
        Self { feedback }
    }

    #[must_use]
    pub(crate) fn shared(feedback: Arc<FeedbackService>) -> Arc<Self> {
        Arc::new(Self::new(feedback))
    }
}
