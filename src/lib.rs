//! Bookshelf
//!
//! A REST JSON API exposing an in-memory catalog of books: listing, lookup by
//! id, author or title, and create/replace/delete.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
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

impl AppState {
    /// Wire the repository and services from configuration
    pub fn new(config: AppConfig) -> Self {
        let repository = repository::Repository::new(&config.books);
        let services = services::Services::new(repository, &config.books);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
