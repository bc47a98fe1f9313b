pub mod catalog_service;
pub mod identity_provider;

pub use catalog_service::CatalogService;
pub use identity_provider::IdentityProvider;
