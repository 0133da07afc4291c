use axum::Json;
use serde_json::{json, Value};

/// Health check endpoint. Does not contact the remote editor server.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
