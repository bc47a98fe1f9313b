use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::value_objects::BookId;

/// 書籍（カタログのエンティティ）
///
/// カタログサービスが所有する。API層は読み取りと転送のみを行う。
/// JSONのフィールド名は既存クライアントとの互換性のためスペイン語のまま。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    #[schema(value_type = String, example = "42")]
    pub id: BookId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "disponible")]
    pub available: bool,
}

impl Book {
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            available,
        }
    }

    /// タイトルまたは著者に検索条件が含まれるか（大文字小文字を区別しない）
    pub fn matches(&self, criterion: &str) -> bool {
        let needle = criterion.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.author.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_wire_format() {
        let book = Book::new("42", "Cien años de soledad", "Gabriel García Márquez", true);
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "42",
                "titulo": "Cien años de soledad",
                "autor": "Gabriel García Márquez",
                "disponible": true,
            })
        );
    }

    #[test]
    fn test_book_matches_title_or_author_ignoring_case() {
        let book = Book::new("1", "Rayuela", "Julio Cortázar", false);
        assert!(book.matches("rayu"));
        assert!(book.matches("CORTÁZAR"));
        assert!(!book.matches("Borges"));
    }

    #[test]
    fn test_empty_criterion_matches_everything() {
        let book = Book::new("1", "Ficciones", "Jorge Luis Borges", true);
        assert!(book.matches(""));
    }
}
