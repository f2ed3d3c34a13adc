// src/config.rs
use std::env;
use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_PRODUCTS_PER_PAGE: i64 = 4;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PRODUCTS_PER_PAGE musi być dodatnią liczbą całkowitą, otrzymano: {0}")]
    InvalidPageSize(String),

    #[error("Nieprawidłowy adres BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub products_per_page: i64,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Wczytuje konfigurację ze zmiennych środowiskowych (po `dotenv()`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let products_per_page = match lookup("PRODUCTS_PER_PAGE") {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(value) if value > 0 => value,
                _ => return Err(ConfigError::InvalidPageSize(raw)),
            },
            None => DEFAULT_PRODUCTS_PER_PAGE,
        };

        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr.clone()))?;

        Ok(AppConfig {
            database_url,
            products_per_page,
            bind_addr,
        })
    }
}
