use axum::{extract::State, routing::get, Json, Router};
use jobboard_types::ClientConfig;
use serde_json::{json, Value};

use crate::state::AppState;

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/health", get(get_health))
        .route("/api/v1/config", get(get_config))
}

async fn get_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn get_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(state.client_config)
}
