//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use tableside_app::domain::feedback::{FeedbackService, MockInteractionStore};

use crate::state::State;

pub(crate) fn state_with_store(store: MockInteractionStore) -> Arc<State> {
    State::shared(Arc::new(FeedbackService::new(Arc::new(store))))
}

pub(crate) fn feedback_service(store: MockInteractionStore, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_store(store)))
            .push(route),
    )
}
