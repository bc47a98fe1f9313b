use library_catalog::{
    adapters::mock::{
        catalog_service::CatalogService as InMemoryCatalogService,
        identity_provider::IdentityProvider as StaticIdentityProvider,
    },
    api::{handlers::AppState, router::create_router},
    application::catalog::ServiceDependencies,
    config::{AppConfig, load_seed_books},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Initialize adapters
    let catalog_service = Arc::new(InMemoryCatalogService::new());
    if let Some(path) = &config.seed_file {
        let books = load_seed_books(path)?;
        tracing::info!("Seeding catalog with {} books from {}", books.len(), path.display());
        for book in books {
            catalog_service.add_book(book);
        }
    }

    let identity_provider = Arc::new(StaticIdentityProvider::new());
    for grant in &config.tokens {
        identity_provider.register_principal(grant.token.clone(), grant.principal.clone());
    }
    if config.tokens.is_empty() {
        tracing::warn!("CATALOG_API_TOKENS is empty; every /libros request will be rejected");
    }

    // Create service dependencies
    let service_deps = ServiceDependencies {
        catalog_service,
        identity_provider,
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
