use axum::Json;
use utoipa::{
    Modify, OpenApi,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};

use super::{handlers, types::ErrorResponse};
use crate::domain::book::Book;

/// カタログAPIのOpenAPIドキュメント
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catálogo de Libros",
        description = "API para la gestión del catálogo de libros en la biblioteca."
    ),
    paths(
        handlers::get_book,
        handlers::is_book_available,
        handlers::update_availability,
        handlers::search_books,
    ),
    components(schemas(Book, ErrorResponse)),
    modifiers(&BearerSecurity),
    tags(
        (name = "Catálogo de Libros", description = "API para la gestión del catálogo de libros en la biblioteca.")
    )
)]
pub struct ApiDoc;

/// Bearerトークン認証のセキュリティスキームを登録する
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// GET /api-docs/openapi.json - OpenAPIドキュメントを返す
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
