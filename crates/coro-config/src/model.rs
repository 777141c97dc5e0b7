use crate::backend::{ConfigBackend, TomlConfigBackend};
use crate::paths::ConfigError;
use serde::{Deserialize, Serialize};

pub const CATALOG_SECTION: &str = "catalog";

/// Sección `[catalog]` de `coro.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
  /// Filtro de `tracing` usado cuando `RUST_LOG` no está definido.
  #[serde(default = "default_log_filter")]
  pub log_filter: String,

  /// Capacidad inicial reservada para artistas (registro incluido).
  #[serde(default)]
  pub artist_capacity: usize,

  /// Capacidad inicial reservada para canciones.
  #[serde(default)]
  pub song_capacity: usize,

  /// Capacidad inicial reservada para géneros (registro incluido).
  #[serde(default)]
  pub genre_capacity: usize,
}

fn default_log_filter() -> String {
  "info".to_string()
}

impl Default for CatalogConfig {
  fn default() -> Self {
    CatalogConfig {
      log_filter: default_log_filter(),
      artist_capacity: 0,
      song_capacity: 0,
      genre_capacity: 0,
    }
  }
}

impl CatalogConfig {
  /// Carga la sección (o sus valores por defecto) y la vuelve a escribir
  /// para que el archivo siempre refleje todas las claves.
  pub fn load(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default(CATALOG_SECTION)?;
    backend.save_section(CATALOG_SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self, backend: &TomlConfigBackend) -> Result<(), ConfigError> {
    backend.save_section(CATALOG_SECTION, self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::paths::CoroPaths;
  use tempfile::tempdir;

  #[test]
  fn load_writes_defaults_back() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(CoroPaths::rooted_at(tmp.path()).unwrap());

    let cfg = CatalogConfig::load(&backend).unwrap();
    assert_eq!(cfg, CatalogConfig::default());

    let raw = std::fs::read_to_string(backend.paths().config_file()).unwrap();
    assert!(raw.contains("log_filter = \"info\""));
  }

  #[test]
  fn partial_section_fills_missing_keys() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(CoroPaths::rooted_at(tmp.path()).unwrap());
    std::fs::write(backend.paths().config_file(), "[catalog]\nartist_capacity = 64\n").unwrap();

    let cfg = CatalogConfig::load(&backend).unwrap();
    assert_eq!(cfg.artist_capacity, 64);
    assert_eq!(cfg.log_filter, "info");
    assert_eq!(cfg.genre_capacity, 0);
  }
}
