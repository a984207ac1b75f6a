use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::upstream::Fetcher;

pub mod handlers;
pub mod models;

pub const LOOKUP_PATH: &str = "/api/requisitoriados";

pub fn create_router<F: Fetcher>(fetcher: Arc<F>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(LOOKUP_PATH, get(handlers::lookup_handler::<F>))
        .with_state(fetcher)
        .layer(cors)
}
