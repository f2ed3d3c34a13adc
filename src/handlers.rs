// src/handlers.rs
use axum::Json;
use axum::extract::{Query, State};

use crate::errors::AppError;
use crate::filters::ListingParams;
use crate::models::ProductsListViewModel;
use crate::services;
use crate::state::AppState;

pub async fn list_products(
    State(app_state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<ProductsListViewModel>, AppError> {
    tracing::info!(
        "Obsłużono zapytanie GET /api/products z parametrami: {:?}",
        params
    );

    let view_model = services::list_products(&app_state, params.page()).await?;
    Ok(Json(view_model))
}

pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}
