use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, create_book, create_rental, delete_book, delete_rental, get_book, get_rental,
    list_books, list_rentals, update_book, update_rental,
};

/// Creates the API router with the book catalog and rental endpoints
///
/// Books:
/// - POST /api/books, GET /api/books
/// - GET / PUT / DELETE /api/books/:id
///
/// Rentals:
/// - POST /api/rentals, GET /api/rentals
/// - GET / PUT / DELETE /api/rentals/:id
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/api/books", get(list_books).post(create_book))
        .route(
            "/api/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route("/api/rentals", get(list_rentals).post(create_rental))
        .route(
            "/api/rentals/:id",
            get(get_rental).put(update_rental).delete(delete_rental),
        )
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
