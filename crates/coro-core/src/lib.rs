pub mod catalog;
pub mod domain;
pub mod errors;
pub mod registry;

pub use catalog::Catalog;
pub use errors::{CatalogError, CoreError};
pub use registry::Registry;
