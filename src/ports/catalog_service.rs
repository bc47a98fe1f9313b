use crate::domain::{book::Book, value_objects::BookId};
use async_trait::async_trait;
use thiserror::Error;

/// カタログサービスポートのエラー
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 書籍が存在しない
    #[error("Book {0} not found")]
    BookNotFound(BookId),

    /// バックエンドの障害
    #[error("Catalog backend failure")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// カタログサービスポート
///
/// 書籍の永続化と検索を担う外部コラボレーター。
/// API層はこのインターフェース越しにのみカタログへアクセスする。
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// IDで書籍を取得する
    ///
    /// 存在しない場合は `Ok(None)` を返す。
    async fn get_book(&self, book_id: &BookId) -> Result<Option<Book>>;

    /// 書籍の貸出可否を更新する
    ///
    /// 存在しない書籍の場合は `CatalogError::BookNotFound` を返す。
    async fn update_availability(&self, book_id: &BookId, available: bool) -> Result<()>;

    /// 自由文の条件で書籍を検索する
    ///
    /// 結果の順序はサービス側が決める。該当なしの場合は空のVecを返す。
    async fn search_books(&self, criterion: &str) -> Result<Vec<Book>>;
}
