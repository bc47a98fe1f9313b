use crate::domain::{book::Book, value_objects::BookId};
use crate::ports::{CatalogService, IdentityProvider};
use std::sync::Arc;

use super::errors::{CatalogApplicationError, Result};

/// サービスの依存関係
///
/// 外部コラボレーターをポート型で保持するだけのデータ構造。
/// 振る舞いは持たず、各操作関数に明示的に渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub catalog_service: Arc<dyn CatalogService>,
    pub identity_provider: Arc<dyn IdentityProvider>,
}

/// 書籍を取得する
///
/// # エラー
/// - BookNotFound: 書籍が存在しない
/// - CatalogServiceError: カタログサービスの障害
pub async fn get_book(deps: &ServiceDependencies, book_id: BookId) -> Result<Book> {
    deps.catalog_service
        .get_book(&book_id)
        .await?
        .ok_or(CatalogApplicationError::BookNotFound(book_id))
}

/// 書籍が貸出可能か確認する
///
/// 存在しない書籍はエラーではなく `false` として扱う。
pub async fn is_book_available(deps: &ServiceDependencies, book_id: BookId) -> Result<bool> {
    let book = deps.catalog_service.get_book(&book_id).await?;
    if book.is_none() {
        tracing::debug!(book_id = %book_id, "Availability check for unknown book");
    }
    Ok(book.is_some_and(|b| b.available))
}

/// 書籍の貸出可否を更新する
///
/// # エラー
/// - BookNotFound: 書籍が存在しない
/// - CatalogServiceError: カタログサービスの障害
pub async fn update_availability(
    deps: &ServiceDependencies,
    book_id: BookId,
    available: bool,
) -> Result<()> {
    deps.catalog_service
        .update_availability(&book_id, available)
        .await?;

    tracing::info!(book_id = %book_id, available, "Book availability updated");
    Ok(())
}

/// 書籍を検索する
///
/// カタログサービスが返した順序をそのまま保つ。該当なしは空のVec。
pub async fn search_books(deps: &ServiceDependencies, criterion: &str) -> Result<Vec<Book>> {
    let books = deps.catalog_service.search_books(criterion).await?;
    tracing::debug!(criterion, results = books.len(), "Catalog search completed");
    Ok(books)
}
