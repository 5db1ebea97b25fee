use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};
use session_shared::config::AppConfig;

/// Health check handler - GET /health
pub async fn health_check(State(config): State<Arc<AppConfig>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": config.app.name,
        "environment": config.app.env.as_str(),
    }))
}
