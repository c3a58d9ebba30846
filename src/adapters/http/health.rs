//! Liveness probe.

use axum::Json;
use serde_json::{json, Value};

/// GET /health - no auth
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
