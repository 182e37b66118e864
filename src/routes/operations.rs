//! Named-operation endpoint.

use axum::extract::State;
use axum::response::Json;

use crate::operation::{self, OperationRequest, OperationResponse};
use crate::state::AppState;

/// `POST /api/operations` — run one query or mutation.
///
/// Always answers 200; failures are reported inside the envelope.
pub async fn execute_operation(
    State(state): State<AppState>,
    Json(req): Json<OperationRequest>,
) -> Json<OperationResponse> {
    Json(operation::execute(state.store.as_ref(), &req).await)
}
