use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Public endpoints as `(route, description)` pairs, in display order.
const ENDPOINTS: &[(&str, &str)] = &[
    ("GET /api/movies", "List all movies"),
    ("GET /api/movies/search?q=", "Search movies by title or genre"),
    ("GET /api/movies/{id}", "Get a movie by id"),
    ("POST /api/movies", "Create a movie"),
    ("PUT /api/movies/{id}", "Update a movie"),
    ("DELETE /api/movies/{id}", "Delete a movie"),
    ("GET /health", "Service and database health"),
];

#[derive(Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: serde_json::Map<String, serde_json::Value>,
}

/// GET / -- describes the API and lists its endpoints.
async fn api_info() -> Json<ApiInfo> {
    let endpoints = ENDPOINTS
        .iter()
        .map(|(route, description)| {
            (route.to_string(), serde_json::Value::from(*description))
        })
        .collect();

    Json(ApiInfo {
        message: "Movie catalog API is running",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(api_info))
}
