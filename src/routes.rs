use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))

        // Translation
        .route("/translate/", post(handlers::translate))
        .route("/translate", post(handlers::translate))
}

/// Full application with middleware and state attached
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        // Input text has no length limit
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.config.translator_config.model,
    }))
}
