#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use library_catalog::adapters::mock::{CatalogService, IdentityProvider};
use library_catalog::api::handlers::AppState;
use library_catalog::api::router::create_router;
use library_catalog::application::catalog::ServiceDependencies;
use library_catalog::domain::{
    book::Book,
    role::{Principal, Role},
    value_objects::BookId,
};
use library_catalog::ports::CatalogService as _;
use library_catalog::ports::{catalog_service, identity_provider};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

pub const LIBRARIAN_TOKEN: &str = "librarian-token";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const PATRON_TOKEN: &str = "patron-token";

/// テスト用の書籍カタログ
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("42", "Cien años de soledad", "Gabriel García Márquez", true),
        Book::new("7", "Rayuela", "Julio Cortázar", false),
        Book::new("13", "Ficciones", "Jorge Luis Borges", true),
    ]
}

/// 司書・管理者・権限なしの3種類のトークンを登録した認証プロバイダー
pub fn identity_provider() -> Arc<IdentityProvider> {
    let provider = IdentityProvider::new();
    provider.register(LIBRARIAN_TOKEN, "ana", vec![Role::Librarian]);
    provider.register(ADMIN_TOKEN, "root", vec![Role::Admin]);
    provider.register(PATRON_TOKEN, "pablo", vec![]);
    Arc::new(provider)
}

/// モックアダプターでAPIルーターを構築する
pub fn setup_app(catalog_service: Arc<CatalogService>) -> axum::Router {
    setup_app_with(catalog_service, identity_provider())
}

/// 任意のポート実装でAPIルーターを構築する
pub fn setup_app_with(
    catalog_service: Arc<dyn catalog_service::CatalogService>,
    identity_provider: Arc<dyn identity_provider::IdentityProvider>,
) -> axum::Router {
    let service_deps = ServiceDependencies {
        catalog_service,
        identity_provider,
    };
    create_router(Arc::new(AppState { service_deps }))
}

/// 呼び出し回数を数えるCatalogService
///
/// 実際の処理はインメモリのカタログに委譲する。
pub struct CountingCatalogService {
    inner: CatalogService,
    calls: AtomicUsize,
}

impl CountingCatalogService {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            inner: CatalogService::with_books(books),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl catalog_service::CatalogService for CountingCatalogService {
    async fn get_book(&self, book_id: &BookId) -> catalog_service::Result<Option<Book>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_book(book_id).await
    }

    async fn update_availability(
        &self,
        book_id: &BookId,
        available: bool,
    ) -> catalog_service::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.update_availability(book_id, available).await
    }

    async fn search_books(&self, criterion: &str) -> catalog_service::Result<Vec<Book>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.search_books(criterion).await
    }
}

/// 常に失敗するIdentityProvider
pub struct UnreachableIdentityProvider;

#[async_trait::async_trait]
impl identity_provider::IdentityProvider for UnreachableIdentityProvider {
    async fn authenticate(&self, _token: &str) -> identity_provider::Result<Option<Principal>> {
        Err("identity provider unreachable".into())
    }
}

/// 4つのカタログルートへのリクエストを組み立てる
pub fn catalog_requests(token: Option<&str>) -> Vec<Request<Body>> {
    vec![
        get("/libros/42", token),
        get("/libros/42/disponible", token),
        put_json("/libros/42/disponibilidad", token, "false"),
        get("/libros/buscar?criterio=o", token),
    ]
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn put_json(uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: &axum::Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
