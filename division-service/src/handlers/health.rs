use axum::{response::IntoResponse, Json};
use serde_json::json;

use crate::config::DEFAULT_SERVICE_NAME;

/// Liveness check. The payload is fixed; no dependency is consulted.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": DEFAULT_SERVICE_NAME
    }))
}
