//! Repository layer for in-memory storage

pub mod books;

use crate::config::BooksConfig;

/// Main repository struct holding every store
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create the repositories, seeding them when configured to
    pub fn new(config: &BooksConfig) -> Self {
        let books = if config.seed {
            books::BooksRepository::seeded(config.id_strategy)
        } else {
            books::BooksRepository::new(config.id_strategy)
        };
        Self { books }
    }
}
