use crate::domain::value_objects::BookId;
use crate::ports::CatalogError;
use thiserror::Error;

/// カタログアプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogApplicationError {
    /// 書籍が見つからない
    #[error("Book {0} not found")]
    BookNotFound(BookId),

    /// CatalogServiceのエラー
    #[error("Catalog service error")]
    CatalogServiceError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<CatalogError> for CatalogApplicationError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::BookNotFound(book_id) => CatalogApplicationError::BookNotFound(book_id),
            CatalogError::Backend(source) => CatalogApplicationError::CatalogServiceError(source),
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogApplicationError>;
