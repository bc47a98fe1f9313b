mod catalog_service;
mod errors;

pub use catalog_service::{
    ServiceDependencies, get_book, is_book_available, search_books, update_availability,
};
pub use errors::{CatalogApplicationError, Result};
