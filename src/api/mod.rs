//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let docs_enabled = state.config.docs.enabled;

    let api = Router::new()
        // Health
        .route("/", get(health::hello))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books))
        .route("/books/id/:id", get(books::get_book))
        .route("/books/author/:author", get(books::books_by_author))
        .route("/books/title/:title", get(books::books_by_title))
        .route("/book", post(books::create_book))
        .route(
            "/book/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .with_state(state);

    let app = if docs_enabled {
        api.merge(openapi::create_openapi_router())
    } else {
        api
    };

    app.layer(TraceLayer::new_for_http()).layer(cors)
}
