//! HTTP surface of the content service.

use application::ContentApp;
use axum::{
    middleware,
    routing::{any, delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod cors;
pub mod error;
pub mod handlers;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub content_app: Arc<ContentApp>,
}

impl AppState {
    pub fn new(content_app: Arc<ContentApp>) -> Self {
        Self { content_app }
    }
}

/// Build the router with every route, CORS and request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check answers any method
        .route("/", any(handlers::health))
        .route(
            "/get",
            get(handlers::list_contents).fallback(handlers::only_get),
        )
        .route(
            "/post",
            post(handlers::create_content).fallback(handlers::only_post),
        )
        .route(
            "/delete",
            delete(handlers::delete_content).fallback(handlers::only_delete),
        )
        .route(
            "/update",
            put(handlers::update_content).fallback(handlers::only_put),
        )
        .route(
            "/totalnum",
            get(handlers::count_contents).fallback(handlers::only_get),
        )
        .layer(middleware::from_fn(cors::cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
