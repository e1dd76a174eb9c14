use crate::relay::RelayService;
use crate::ws::ws_handler;
use axum::{Json, Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Router for the signaling relay: a health banner at `/` and the WebSocket
/// endpoint at `/ws`. CORS stays wide open because the dashboard is served
/// from a different origin.
pub fn app(service: RelayService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(service)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "signaling relay running" }))
}
