use std::path::Path;

use axum::http::{header, Method};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use contracts::shared::chat::CHAT_ENDPOINT;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::state::AppState;
use crate::system::middleware::request_logger;

/// Собирает роутер: API, health-check и статика фронтенда.
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(CHAT_ENDPOINT, post(handlers::chat::chat))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
