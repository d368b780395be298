use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;
use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Health check: el servicio responde y sabe qué dataset sirve
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "db_file": state.config.database_url,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
