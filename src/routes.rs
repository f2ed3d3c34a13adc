// src/routes.rs
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{list_products, not_found_handler};
use crate::htmx_handlers::{index_handler, product_page_handler};
use crate::state::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/page/{page}", get(product_page_handler))
        .route("/api/products", get(list_products))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
