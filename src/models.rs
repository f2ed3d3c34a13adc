// src/models.rs
use serde::{Deserialize, Serialize};

use crate::pagination::PagingInfo;

/// Produkt w katalogu sklepu. Cena w groszach (najmniejszej jednostce waluty).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: String,
}

impl Product {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        price: i64,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
        }
    }
}

/// Jedna strona listy produktów razem z metadanymi paginacji.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductsListViewModel {
    pub products: Vec<Product>,
    pub paging_info: PagingInfo,
}
