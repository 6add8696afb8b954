use crate::signaling::{SignalingService, ws_handler};
use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the relay's HTTP app: the `/video` WebSocket endpoint with a
/// permissive CORS layer (the control client runs in a browser on another
/// origin).
pub fn build_router(service: SignalingService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/video", get(ws_handler))
        .layer(cors)
        .with_state(service)
}
