use crate::domain::{book::Book, value_objects::BookId};
use crate::ports::catalog_service::{CatalogError, CatalogService as CatalogServiceTrait, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// CatalogServiceのインメモリ実装
///
/// 書籍をID順に保持するため、検索結果もID順になる。
/// 検索はタイトルと著者に対する大文字小文字を区別しない部分一致。
pub struct CatalogService {
    books: Mutex<BTreeMap<BookId, Book>>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let service = Self::new();
        for book in books {
            service.add_book(book);
        }
        service
    }

    /// 書籍を登録する（同じIDがあれば置き換える）
    pub fn add_book(&self, book: Book) {
        self.lock().insert(book.id.clone(), book);
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<BookId, Book>> {
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogServiceTrait for CatalogService {
    async fn get_book(&self, book_id: &BookId) -> Result<Option<Book>> {
        Ok(self.lock().get(book_id).cloned())
    }

    async fn update_availability(&self, book_id: &BookId, available: bool) -> Result<()> {
        let mut books = self.lock();
        let book = books
            .get_mut(book_id)
            .ok_or_else(|| CatalogError::BookNotFound(book_id.clone()))?;
        book.available = available;
        Ok(())
    }

    async fn search_books(&self, criterion: &str) -> Result<Vec<Book>> {
        Ok(self
            .lock()
            .values()
            .filter(|book| book.matches(criterion))
            .cloned()
            .collect())
    }
}
