use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 書籍検索のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct SearchBooksQuery {
    /// 検索条件（タイトル、著者など）
    pub criterio: String,
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
