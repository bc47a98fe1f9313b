use crate::domain::role::Principal;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 認証プロバイダーポート
///
/// Bearerトークンから呼び出し元とそのロールを解決する。
/// セッションやトークン発行のプロトコルはこのポートの外側の責務。
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// トークンを検証し、呼び出し元を返す
    ///
    /// 未知または無効なトークンの場合は `Ok(None)` を返す。
    async fn authenticate(&self, token: &str) -> Result<Option<Principal>>;
}
