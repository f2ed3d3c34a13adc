// src/state.rs

use std::sync::Arc;

use crate::repository::StoreRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn StoreRepository>,
    pub products_per_page: i64,
}

impl AppState {
    pub fn new(repository: Arc<dyn StoreRepository>, products_per_page: i64) -> Self {
        AppState {
            repository,
            products_per_page,
        }
    }
}
