//! Business logic services

pub mod catalog;

use crate::{config::BooksConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, books_config: &BooksConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository, books_config.empty_filter_is_not_found),
        }
    }
}
