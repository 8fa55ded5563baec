use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::pipeline::DefaultPipeline;

pub mod handlers;
pub mod models;
pub mod templates;

pub fn create_router(pipeline: Arc<DefaultPipeline>, static_dir: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // HTML pages
        .route("/", get(handlers::home_handler))
        .route("/search", get(handlers::search_page_handler))
        // API routes
        .route("/api/search", post(handlers::search_handler))
        .with_state(pipeline)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
}
