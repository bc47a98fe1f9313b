pub mod book;
pub mod role;
pub mod value_objects;

pub use book::*;
pub use role::*;
pub use value_objects::*;
