// src/lib.rs

pub mod config;
pub mod errors;
pub mod filters;
pub mod handlers;
pub mod htmx_handlers;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
