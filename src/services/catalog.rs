//! Book catalog service

use crate::{
    config::IdStrategy,
    error::{AppError, AppResult},
    models::book::{Book, BookId, BookPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    empty_filter_is_not_found: bool,
}

impl CatalogService {
    pub fn new(repository: Repository, empty_filter_is_not_found: bool) -> Self {
        Self {
            repository,
            empty_filter_is_not_found,
        }
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.repository.books.id_strategy()
    }

    /// Parse a path identifier with the repository's strategy
    pub fn parse_id(&self, raw: &str) -> AppResult<BookId> {
        BookId::parse(raw, self.id_strategy())
    }

    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    pub async fn count_books(&self) -> usize {
        self.repository.books.len().await
    }

    pub async fn get_book(&self, id: BookId) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Books by exact author name
    pub async fn books_by_author(&self, author: &str) -> AppResult<Vec<Book>> {
        let books = self.repository.books.find_by_author(author).await;
        self.non_empty(books, || format!("No books by author {}", author))
    }

    /// Books whose title contains the given text, ignoring case
    pub async fn books_by_title(&self, title: &str) -> AppResult<Vec<Book>> {
        let books = self.repository.books.find_by_title(title).await;
        self.non_empty(books, || format!("No books with a title containing {}", title))
    }

    pub async fn create_book(&self, data: BookPayload) -> AppResult<Book> {
        match self.repository.books.insert(data).await {
            Ok(book) => {
                tracing::info!(id = %book.id, title = ?book.title, "Book created");
                Ok(book)
            }
            Err(e) => {
                tracing::warn!("Book creation rejected: {}", e);
                Err(e)
            }
        }
    }

    pub async fn update_book(&self, id: BookId, data: BookPayload) -> AppResult<Book> {
        match self.repository.books.replace(id, data).await {
            Ok(book) => {
                tracing::info!(id = %book.id, title = ?book.title, "Book updated");
                Ok(book)
            }
            Err(e) => {
                tracing::warn!("Book {} update rejected: {}", id, e);
                Err(e)
            }
        }
    }

    pub async fn delete_book(&self, id: BookId) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!(id = %id, "Book deleted");
        Ok(())
    }

    fn non_empty(&self, books: Vec<Book>, message: impl FnOnce() -> String) -> AppResult<Vec<Book>> {
        if books.is_empty() && self.empty_filter_is_not_found {
            return Err(AppError::NotFound(message()));
        }
        Ok(books)
    }
}
