use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::infra::app_state::AppState;

pub async fn ping_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog = state.catalog();
    Json(json!({
        "status": "healthy",
        "catalog": {
            "anime": catalog.len(),
            "episodes": catalog.episode_count(),
            "source": catalog.source().to_string(),
        },
    }))
}
