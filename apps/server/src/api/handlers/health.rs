use axum::{http::StatusCode, response::IntoResponse, Json};

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
