//! Liveness and readiness endpoints.

use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Probes the SMTP relay connection before returning OK.
/// Returns 503 Service Unavailable if the relay is not reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.email().test_connection().await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
