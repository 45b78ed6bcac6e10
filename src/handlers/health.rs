use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Fixed welcome message served at the root path.
pub async fn home() -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to the Breast Cancer Classifier AI Chatbot"
    }))
}

/// Liveness probe. The service holds no backing stores, so this always
/// reports healthy while the process is up.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "chatbot-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
