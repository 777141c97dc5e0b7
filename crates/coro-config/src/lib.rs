mod backend;
mod model;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use model::{CATALOG_SECTION, CatalogConfig};
pub use paths::{BASE_DIR_ENV, ConfigError, CoroPaths};
