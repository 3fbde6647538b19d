//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /api/health
///
/// Returns 503 with the same body shape when the property store does not
/// answer.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database) = match state.property_service.health().await {
        Ok(()) => (StatusCode::OK, "connected"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "unreachable"),
    };

    let body = HealthResponse {
        status: if status.is_success() { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    };

    (status, Json(body))
}
