use crate::application::catalog::CatalogApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(CatalogApplicationError);

impl From<CatalogApplicationError> for ApiError {
    fn from(err: CatalogApplicationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self.0 {
            // 404 Not Found - リクエストされた書籍が存在しない
            CatalogApplicationError::BookNotFound(ref book_id) => (
                StatusCode::NOT_FOUND,
                "BOOK_NOT_FOUND",
                format!("Book {} not found", book_id),
            ),

            // 500 Internal Server Error - 詳細はログのみ、クライアントには一般的なメッセージ
            CatalogApplicationError::CatalogServiceError(ref e) => {
                tracing::error!("Catalog service error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CATALOG_SERVICE_ERROR",
                    "Catalog service error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
