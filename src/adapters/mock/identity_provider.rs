use crate::domain::role::{Principal, Role};
use crate::ports::identity_provider::{IdentityProvider as IdentityProviderTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// IdentityProviderのモック実装
///
/// 静的なテーブルからBearerトークンを解決する。
pub struct IdentityProvider {
    principals: Mutex<HashMap<String, Principal>>,
}

impl IdentityProvider {
    pub fn new() -> Self {
        Self {
            principals: Mutex::new(HashMap::new()),
        }
    }

    /// テスト用にトークンとロールを登録
    pub fn register(&self, token: impl Into<String>, subject: impl Into<String>, roles: Vec<Role>) {
        self.register_principal(token, Principal::new(subject, roles));
    }

    pub fn register_principal(&self, token: impl Into<String>, principal: Principal) {
        self.principals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), principal);
    }
}

impl Default for IdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProviderTrait for IdentityProvider {
    async fn authenticate(&self, token: &str) -> Result<Option<Principal>> {
        Ok(self
            .principals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned())
    }
}
