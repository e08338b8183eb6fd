//! Book endpoints

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload},
    AppState,
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.list_books().await)
}

/// Get a book by identifier
#[utoipa::path(
    get,
    path = "/books/id/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID (integer or UUID, depending on the id strategy)")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Malformed identifier", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let id = state.services.catalog.parse_id(&id)?;
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Books by author (exact, case-sensitive match)
#[utoipa::path(
    get,
    path = "/books/author/{author}",
    tag = "books",
    params(("author" = String, Path, description = "Author name")),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 404, description = "No book by this author", body = crate::error::ErrorResponse)
    )
)]
pub async fn books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.books_by_author(&author).await?;
    Ok(Json(books))
}

/// Books whose title contains the given text (case-insensitive)
#[utoipa::path(
    get,
    path = "/books/title/{title}",
    tag = "books",
    params(("title" = String, Path, description = "Fragment of the title")),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 404, description = "No matching title", body = crate::error::ErrorResponse)
    )
)]
pub async fn books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.books_by_title(&title).await?;
    Ok(Json(books))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/book",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book,
            headers(("location" = String, description = "URI of the new book"))),
        (status = 400, description = "A book with this title already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(data): Json<BookPayload>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Book>)> {
    let book = state.services.catalog.create_book(data).await?;
    let location = format!("/book/{}", book.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(book)))
}

/// Replace the title and author of a book
#[utoipa::path(
    put,
    path = "/book/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Body id does not match path id", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<BookPayload>,
) -> AppResult<Json<Book>> {
    let id = state.services.catalog.parse_id(&id)?;
    let book = state.services.catalog.update_book(id, data).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/book/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = state.services.catalog.parse_id(&id)?;
    state.services.catalog.delete_book(id).await?;
    Ok(StatusCode::OK)
}
