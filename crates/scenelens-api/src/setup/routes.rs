//! Route configuration and setup

use crate::constants::{MULTIPART_OVERHEAD_BYTES, STATIC_ROUTE, UPLOADS_ROUTE};
use crate::handlers;
use crate::middleware::{error_detail_middleware, security_headers_middleware};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use scenelens_core::Config;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router<()> {
    let body_limit = config
        .max_file_size_bytes()
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/about", get(handlers::pages::about))
        .route("/upload", post(handlers::upload::upload_image))
        .route("/search-url", post(handlers::search_url::search_by_url))
        .route("/health", get(handlers::health::liveness_check))
        .nest_service(UPLOADS_ROUTE, ServeDir::new(config.upload_dir()))
        .nest_service(STATIC_ROUTE, ServeDir::new(config.public_dir()))
        .fallback(handlers::fallback::not_found)
        .method_not_allowed_fallback(handlers::fallback::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum::middleware::from_fn_with_state(
            config.clone(),
            error_detail_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .with_state(state)
}
