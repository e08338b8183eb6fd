//! In-memory book store

use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    config::IdStrategy,
    error::{AppError, AppResult},
    models::book::{Book, BookId, BookPayload},
};

/// Books loaded at startup, in listing order: (title, author)
pub const SEED_BOOKS: [(&str, &str); 5] = [
    ("Testing Dot", "Carson Alexander"),
    ("Learn Linq", "Meredith Alonso"),
    ("Generics", "Arturo Anand"),
    ("Testing the Mic", "Gytis Barzdukas"),
    ("Drop the Dot", "Van Li"),
];

/// Allocates identifiers. Sequential ids are never reused, even after a delete.
#[derive(Debug)]
enum IdGenerator {
    Sequential { next: i64 },
    Uuid,
}

impl IdGenerator {
    fn new(strategy: IdStrategy) -> Self {
        match strategy {
            IdStrategy::Sequential => IdGenerator::Sequential { next: 1 },
            IdStrategy::Uuid => IdGenerator::Uuid,
        }
    }

    fn next_id(&mut self, books: &[Book]) -> BookId {
        match self {
            IdGenerator::Sequential { next } => {
                let id = *next;
                *next += 1;
                BookId::Sequential(id)
            }
            IdGenerator::Uuid => loop {
                let id = BookId::Uuid(Uuid::new_v4());
                if !books.iter().any(|b| b.id == id) {
                    break id;
                }
            },
        }
    }
}

#[derive(Debug)]
struct BookStore {
    books: Vec<Book>,
    ids: IdGenerator,
}

impl BookStore {
    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }
}

/// Ordered book collection behind a single lock.
///
/// Cloning is cheap and every clone shares the same collection.
#[derive(Clone)]
pub struct BooksRepository {
    store: Arc<RwLock<BookStore>>,
    strategy: IdStrategy,
}

impl BooksRepository {
    /// Create an empty repository
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            store: Arc::new(RwLock::new(BookStore {
                books: Vec::new(),
                ids: IdGenerator::new(strategy),
            })),
            strategy,
        }
    }

    /// Create a repository holding [`SEED_BOOKS`]
    pub fn seeded(strategy: IdStrategy) -> Self {
        let mut ids = IdGenerator::new(strategy);
        let mut books = Vec::with_capacity(SEED_BOOKS.len());
        for (title, author) in SEED_BOOKS {
            let id = ids.next_id(&books);
            books.push(Book::new(id, title, author));
        }

        Self {
            store: Arc::new(RwLock::new(BookStore { books, ids })),
            strategy,
        }
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// List all books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.store.read().await.books.clone()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.books.len()
    }

    /// Get a book by identifier
    pub async fn get_by_id(&self, id: BookId) -> AppResult<Book> {
        self.store
            .read()
            .await
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::book_not_found(id))
    }

    /// Books whose author is exactly `author` (case-sensitive)
    pub async fn find_by_author(&self, author: &str) -> Vec<Book> {
        self.store
            .read()
            .await
            .books
            .iter()
            .filter(|b| b.author.as_deref() == Some(author))
            .cloned()
            .collect()
    }

    /// Books whose title contains `fragment`, ignoring case
    pub async fn find_by_title(&self, fragment: &str) -> Vec<Book> {
        let needle = fragment.to_lowercase();
        self.store
            .read()
            .await
            .books
            .iter()
            .filter(|b| b.title_contains(&needle))
            .cloned()
            .collect()
    }

    /// Append a book under a freshly allocated identifier.
    ///
    /// Any identifier in the payload is ignored. Fails if another book already
    /// carries exactly the same title.
    pub async fn insert(&self, data: BookPayload) -> AppResult<Book> {
        let mut guard = self.store.write().await;
        let store = &mut *guard;

        if let Some(title) = data.title.as_deref() {
            if store.books.iter().any(|b| b.title.as_deref() == Some(title)) {
                return Err(AppError::DuplicateTitle(title.to_string()));
            }
        }

        let id = store.ids.next_id(&store.books);
        let book = Book {
            id,
            title: data.title,
            author: data.author,
        };
        store.books.push(book.clone());
        Ok(book)
    }

    /// Overwrite title and author of an existing book; its identifier never changes
    pub async fn replace(&self, id: BookId, data: BookPayload) -> AppResult<Book> {
        let mut store = self.store.write().await;

        let idx = store.position(id).ok_or_else(|| AppError::book_not_found(id))?;
        if data.id != Some(id) {
            return Err(AppError::IdentifierMismatch { path: id, body: data.id });
        }

        let book = &mut store.books[idx];
        book.title = data.title;
        book.author = data.author;
        Ok(book.clone())
    }

    /// Remove a book
    pub async fn delete(&self, id: BookId) -> AppResult<()> {
        let mut store = self.store.write().await;
        let idx = store.position(id).ok_or_else(|| AppError::book_not_found(id))?;
        store.books.remove(idx);
        Ok(())
    }
}
