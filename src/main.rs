// src/main.rs

use std::sync::Arc;

use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sportsstore::config::AppConfig;
use sportsstore::repository::{InMemoryStoreRepository, PgStoreRepository, StoreRepository};
use sportsstore::routes::create_router;
use sportsstore::seed::seed_products;
use sportsstore::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Inicjalizacja systemu logowania (tracing)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sportsstore=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Inicjalizacja serwera...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Błędna konfiguracja: {}", e);
            std::process::exit(1);
        }
    };

    // --- Źródło produktów ---
    let repository: Arc<dyn StoreRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = match PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await
            {
                Ok(pool) => {
                    tracing::info!("Pomyślnie połączono z bazą danych");
                    pool
                }
                Err(err) => {
                    tracing::error!("Nie można połączyć z bazą danych: {:?}", err);
                    std::process::exit(1);
                }
            };

            let pg_repository = PgStoreRepository::new(pool);
            if let Err(e) = pg_repository.ensure_schema().await {
                tracing::error!("Nie można utworzyć tabeli products: {}", e);
                std::process::exit(1);
            }
            if let Err(e) = pg_repository.seed_if_empty(&seed_products()).await {
                tracing::error!("Nie można zapisać produktów startowych: {}", e);
                std::process::exit(1);
            }
            Arc::new(pg_repository)
        }
        None => {
            tracing::warn!("Brak DATABASE_URL - używam katalogu w pamięci");
            Arc::new(InMemoryStoreRepository::new(seed_products()))
        }
    };

    let app_state = AppState::new(repository, config.products_per_page);
    let app = create_router(app_state);

    tracing::info!("Serwer nasłuchuje na {}", config.bind_addr);

    let listener = match TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Nie można powiązać adresu {}: {}", config.bind_addr, e);
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Błąd serwera: {}", e);
    }
}
