//! Interaction Tracking Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

/// Track Interaction Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TrackRequest {
    /// Customer identifier
    pub customer_id: String,

    /// Item identifier
    pub item_id: String,

    /// Action tag; `view` and `cart` carry weight, anything else scores zero
    pub action: String,
}

/// Track Interaction Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TrackResponse {
    /// Always true; the store write is best-effort
    pub success: bool,

    /// Human-readable confirmation
    pub message: String,
}

/// Track Interaction Handler
///
/// Scores the action and forwards it to the sheet-backed store without
/// awaiting the write. The response never reflects store failures.
#[endpoint(
    tags("feedback"),
    summary = "Record an interaction",
    responses(
        (status_code = StatusCode::OK, description = "Interaction recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<TrackRequest>,
    depot: &mut Depot,
) -> Result<Json<TrackResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    state
        .feedback
        .track(&request.customer_id, &request.item_id, &request.action);

    Ok(Json(TrackResponse {
        success: true,
        message: format!("Feedback {} recorded", request.action),
    }))
}
