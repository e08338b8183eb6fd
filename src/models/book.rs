//! Book model

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    config::IdStrategy,
    error::{AppError, AppResult},
};

/// Book identifier.
///
/// Serialized as a JSON number for the sequential strategy and as a
/// hyphenated UUID string for the uuid strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum BookId {
    Sequential(i64),
    Uuid(Uuid),
}

impl BookId {
    /// Parse a path segment according to the active identifier strategy
    pub fn parse(raw: &str, strategy: IdStrategy) -> AppResult<Self> {
        match strategy {
            IdStrategy::Sequential => raw
                .parse::<i64>()
                .map(BookId::Sequential)
                .map_err(|_| AppError::BadRequest(format!("Invalid book id: {}", raw))),
            IdStrategy::Uuid => Uuid::parse_str(raw)
                .map(BookId::Uuid)
                .map_err(|_| AppError::BadRequest(format!("Invalid book id: {}", raw))),
        }
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookId::Sequential(n) => write!(f, "{}", n),
            BookId::Uuid(u) => write!(f, "{}", u.hyphenated()),
        }
    }
}

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: BookId,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }

    /// Case-insensitive substring match; a book without a title never matches
    pub fn title_contains(&self, needle_lowercase: &str) -> bool {
        self.title
            .as_deref()
            .is_some_and(|t| t.to_lowercase().contains(needle_lowercase))
    }
}

/// Request body for creating or replacing a book.
///
/// On create the `id` is ignored and a fresh one is assigned. On replace it
/// must equal the path identifier.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct BookPayload {
    pub id: Option<BookId>,
    pub title: Option<String>,
    pub author: Option<String>,
}
