use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "jobtrack-api";

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "ok": true,
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}
