pub mod auth;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod types;

pub use auth::{AuthError, Authorized};
pub use error::ApiError;
pub use openapi::ApiDoc;
pub use router::create_router;
pub use types::*;
