use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe - the process is up and serving requests
pub async fn liveness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "alive" })))
}
