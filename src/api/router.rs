use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, get_book, is_book_available, search_books, update_availability};
use super::openapi::openapi_json;

/// Creates the API router with all catalog endpoints
///
/// - GET /libros/:id - Get a book (librarian)
/// - GET /libros/:id/disponible - Check availability (librarian)
/// - PUT /libros/:id/disponibilidad - Set availability (librarian)
/// - GET /libros/buscar?criterio= - Search books (librarian or admin)
/// - GET /api-docs/openapi.json - OpenAPI document (no auth)
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        // Static segment wins over the :id capture
        .route("/libros/buscar", get(search_books))
        .route("/libros/:id", get(get_book))
        .route("/libros/:id/disponible", get(is_book_available))
        .route("/libros/:id/disponibilidad", put(update_availability))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
