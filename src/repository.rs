// src/repository.rs
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::errors::AppError;
use crate::models::Product;

/// Źródło produktów dla sklepu. Zwraca cały katalog; paginacja odbywa się wyżej.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn products(&self) -> Result<Vec<Product>, AppError>;
}

/// Repozytorium trzymające produkty w pamięci (tryb bez bazy danych i testy).
#[derive(Debug, Clone, Default)]
pub struct InMemoryStoreRepository {
    products: Vec<Product>,
}

impl InMemoryStoreRepository {
    pub fn new(products: Vec<Product>) -> Self {
        InMemoryStoreRepository { products }
    }
}

#[async_trait]
impl StoreRepository for InMemoryStoreRepository {
    async fn products(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.products.clone())
    }
}

#[derive(Debug, Clone)]
pub struct PgStoreRepository {
    db_pool: PgPool,
}

impl PgStoreRepository {
    pub fn new(db_pool: PgPool) -> Self {
        PgStoreRepository { db_pool }
    }

    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id BIGINT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                price BIGINT NOT NULL,
                category TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db_pool)
        .await?;
        Ok(())
    }

    /// Wstawia podane produkty tylko wtedy, gdy tabela jest pusta.
    /// Zwraca liczbę wstawionych wierszy.
    pub async fn seed_if_empty(&self, products: &[Product]) -> Result<u64, AppError> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.db_pool)
            .await?;

        if existing > 0 || products.is_empty() {
            tracing::debug!("Tabela products zawiera {} wierszy, pomijam seed", existing);
            return Ok(0);
        }

        let mut query_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO products (id, name, description, price, category) ");
        query_builder.push_values(products, |mut row, product| {
            row.push_bind(product.id)
                .push_bind(product.name.clone())
                .push_bind(product.description.clone())
                .push_bind(product.price)
                .push_bind(product.category.clone());
        });

        let result = query_builder.build().execute(&self.db_pool).await?;
        tracing::info!("Zapisano {} produktów startowych", result.rows_affected());
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn products(&self) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            r#"SELECT id, name, description, price, category FROM products"#,
        )
        .fetch_all(&self.db_pool)
        .await?;
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_repository_keeps_stored_order() {
        let repo = InMemoryStoreRepository::new(vec![
            Product::new(2, "P2", "", 100, "Soccer"),
            Product::new(1, "P1", "", 100, "Soccer"),
        ]);
        let names: Vec<String> = repo
            .products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["P2", "P1"]);
    }

    #[tokio::test]
    async fn default_repository_is_empty() {
        let repo = InMemoryStoreRepository::default();
        assert!(repo.products().await.unwrap().is_empty());
    }
}
