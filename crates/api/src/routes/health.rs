use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// The process is up and answering.
    pub status: &'static str,
    /// `Connected` or `Disconnected`.
    pub database: &'static str,
}

/// GET /health -- reports whether a pooled connection can be acquired.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let connected = movies_db::test_connectivity(&state.pool).await;

    Json(HealthResponse {
        status: "OK",
        database: if connected { "Connected" } else { "Disconnected" },
    })
}

/// Mount health check routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
