use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "analyzer-api"
    }))
}

/// GET /health/ready
/// Ready only when the classification service answers its ping.
pub async fn readiness_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.classifier.ping().await.map_err(AppError::Unavailable)?;
    Ok(Json(json!({ "status": "ready" })))
}
