//! Biblioteca REST API
//!
//! A Rust implementation of the "API RESTful de Biblioteca": a JSON API over
//! usuarios, libros, prestamos and resenias, where a book's stock always
//! reflects the number of loans currently active against it.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
