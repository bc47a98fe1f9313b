use crate::application::catalog::{
    ServiceDependencies, get_book as execute_get_book,
    is_book_available as execute_is_book_available, search_books as execute_search_books,
    update_availability as execute_update_availability,
};
use crate::domain::{
    book::Book,
    role::{LibrarianOnly, LibrarianOrAdmin},
    value_objects::BookId,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    auth::Authorized,
    error::ApiError,
    types::{ErrorResponse, SearchBooksQuery},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /libros/:id - 書籍をIDで取得
///
/// 見つからない場合は404を返す。
#[utoipa::path(
    get,
    path = "/libros/{id}",
    tag = "Catálogo de Libros",
    summary = "Obtener un libro por ID",
    description = "Devuelve la información de un libro específico basado en su ID.",
    params(
        ("id" = String, Path, description = "ID del libro a consultar")
    ),
    responses(
        (status = 200, description = "Libro encontrado", body = Book),
        (status = 401, description = "Credenciales ausentes o inválidas", body = ErrorResponse),
        (status = 403, description = "Se requiere ROLE_LIBRARIAN", body = ErrorResponse),
        (status = 404, description = "Libro no encontrado", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_book(
    _auth: Authorized<LibrarianOnly>,
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let book = execute_get_book(&state.service_deps, BookId::from(book_id)).await?;
    Ok(Json(book))
}

/// GET /libros/:id/disponible - 書籍が貸出可能か確認
///
/// 存在しない書籍は `false` を返す（404にはしない）。
#[utoipa::path(
    get,
    path = "/libros/{id}/disponible",
    tag = "Catálogo de Libros",
    summary = "Verificar disponibilidad de un libro",
    description = "Indica si un libro está disponible o no en la biblioteca.",
    params(
        ("id" = String, Path, description = "ID del libro a consultar")
    ),
    responses(
        (status = 200, description = "Disponibilidad del libro (false si no existe)", body = bool),
        (status = 401, description = "Credenciales ausentes o inválidas", body = ErrorResponse),
        (status = 403, description = "Se requiere ROLE_LIBRARIAN", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn is_book_available(
    _auth: Authorized<LibrarianOnly>,
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
) -> Result<Json<bool>, ApiError> {
    let available = execute_is_book_available(&state.service_deps, BookId::from(book_id)).await?;
    Ok(Json(available))
}

/// GET /libros/buscar?criterio= - 書籍を検索
///
/// 司書または管理者がアクセス可能。該当なしの場合は空の配列を返す。
#[utoipa::path(
    get,
    path = "/libros/buscar",
    tag = "Catálogo de Libros",
    summary = "Buscar libros en el catálogo",
    description = "Busca libros en el catálogo de la biblioteca según un criterio proporcionado.",
    params(
        ("criterio" = String, Query, description = "Criterio de búsqueda (por título, autor, etc.)")
    ),
    responses(
        (status = 200, description = "Libros que coinciden, posiblemente vacío", body = Vec<Book>),
        (status = 400, description = "Falta el parámetro criterio"),
        (status = 401, description = "Credenciales ausentes o inválidas", body = ErrorResponse),
        (status = 403, description = "Se requiere ROLE_LIBRARIAN o ROLE_ADMIN", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn search_books(
    _auth: Authorized<LibrarianOrAdmin>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchBooksQuery>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = execute_search_books(&state.service_deps, &query.criterio).await?;
    Ok(Json(books))
}

// ============================================================================
// Command handlers (PUT)
// ============================================================================

/// PUT /libros/:id/disponibilidad - 書籍の貸出可否を更新
///
/// リクエストボディはJSONの真偽値そのもの（例: `true`）。
/// 既存クライアントとの互換性のためオブジェクトで包まない。
#[utoipa::path(
    put,
    path = "/libros/{id}/disponibilidad",
    tag = "Catálogo de Libros",
    summary = "Actualizar la disponibilidad de un libro",
    description = "Permite cambiar el estado de disponibilidad de un libro en la biblioteca.",
    params(
        ("id" = String, Path, description = "ID del libro a actualizar")
    ),
    request_body(
        content = bool,
        description = "Nuevo estado de disponibilidad como booleano JSON (true/false)",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Disponibilidad actualizada"),
        (status = 401, description = "Credenciales ausentes o inválidas", body = ErrorResponse),
        (status = 403, description = "Se requiere ROLE_LIBRARIAN", body = ErrorResponse),
        (status = 404, description = "Libro no encontrado", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn update_availability(
    auth: Authorized<LibrarianOnly>,
    State(state): State<Arc<AppState>>,
    Path(book_id): Path<String>,
    Json(available): Json<bool>,
) -> Result<StatusCode, ApiError> {
    tracing::debug!(
        subject = %auth.principal().subject,
        book_id = %book_id,
        available,
        "Availability update requested"
    );
    execute_update_availability(&state.service_deps, BookId::from(book_id), available).await?;
    Ok(StatusCode::OK)
}
