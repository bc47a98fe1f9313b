//! ロールベースの認可
//!
//! ハンドラー本体より先に実行されるextractorとして実装する。
//! 認可に失敗した場合、カタログサービスは一切呼び出されない。

use crate::domain::role::{AccessPolicy, Principal, authorize};
use async_trait::async_trait;
use axum::{
    Json,
    extract::FromRequestParts,
    http::{HeaderValue, StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;

use super::handlers::AppState;
use super::types::ErrorResponse;

/// 認証・認可のエラー
#[derive(Debug, Error)]
pub enum AuthError {
    /// Authorizationヘッダーがない、または形式が不正
    #[error("Missing or malformed bearer token")]
    MissingCredentials,

    /// トークンが認証プロバイダーに認識されない
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 認証済みだが要求ロールを持っていない
    #[error("Insufficient role")]
    Forbidden,

    /// 認証プロバイダーの障害
    #[error("Identity provider error")]
    IdentityProviderError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            // 401 Unauthorized - 資格情報がない、または無効
            AuthError::MissingCredentials => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Missing or malformed bearer token",
            ),
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Invalid credentials",
            ),

            // 403 Forbidden - ロール不足
            AuthError::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Insufficient role for this operation",
            ),

            // 500 Internal Server Error
            AuthError::IdentityProviderError(ref e) => {
                tracing::error!("Identity provider error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "IDENTITY_PROVIDER_ERROR",
                    "Identity provider error",
                )
            }
        };

        let mut response = (status, Json(ErrorResponse::new(error_type, message))).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

/// 認可済みの呼び出し元
///
/// `P` のアクセスポリシーを満たす呼び出し元のみ抽出に成功する。
///
/// ```ignore
/// async fn handler(Authorized(principal, ..): Authorized<LibrarianOnly>) { .. }
/// ```
pub struct Authorized<P: AccessPolicy>(pub Principal, PhantomData<fn() -> P>);

impl<P: AccessPolicy> Authorized<P> {
    pub fn principal(&self) -> &Principal {
        &self.0
    }
}

#[async_trait]
impl<P: AccessPolicy> FromRequestParts<Arc<AppState>> for Authorized<P> {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AuthError::MissingCredentials)?;

        let principal = state
            .service_deps
            .identity_provider
            .authenticate(token)
            .await
            .map_err(AuthError::IdentityProviderError)?
            .ok_or_else(|| {
                tracing::debug!(path = %parts.uri.path(), "Access denied: unknown token");
                AuthError::InvalidCredentials
            })?;

        if authorize(P::REQUIRED, &principal.roles).is_err() {
            tracing::debug!(
                subject = %principal.subject,
                roles = ?principal.roles,
                required = ?P::REQUIRED,
                path = %parts.uri.path(),
                "Access denied: missing required role"
            );
            return Err(AuthError::Forbidden);
        }

        Ok(Self(principal, PhantomData))
    }
}

/// `Authorization: Bearer <token>` からトークンを取り出す
fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
