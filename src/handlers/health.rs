use axum::{Json, extract::State, http::StatusCode};

use crate::router::RosterState;
use crate::types::roster::ReadinessResponse;

/// GET /readyz -> 200 once bootstrap has installed the store, 503 before.
pub async fn readyz(State(state): State<RosterState>) -> (StatusCode, Json<ReadinessResponse>) {
    let ready = state.is_ready().await;
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(ReadinessResponse { ready }))
}
