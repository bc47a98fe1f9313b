pub mod catalog_service;
pub mod identity_provider;

pub use catalog_service::{CatalogError, CatalogService};
pub use identity_provider::IdentityProvider;
