//! Liveness probe.

use axum::Json;
use serde_json::{Value, json};

/// Reports that the process is serving requests.
pub async fn health() -> Json<Value> {
    tracing::debug!("service is live");
    Json(json!({ "status": "ok" }))
}
