use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Variable de entorno que fuerza un directorio base (modo portable / tests).
pub const BASE_DIR_ENV: &str = "CORO_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Directorios de configuración de Coro.
///
/// Con `CORO_BASE_DIR` definido la configuración cuelga de esa raíz; si no,
/// se usa el directorio de configuración estándar del sistema operativo.
#[derive(Debug, Clone)]
pub struct CoroPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
}

impl CoroPaths {
  pub fn new() -> Result<Self, ConfigError> {
    if let Ok(env_base) = std::env::var(BASE_DIR_ENV) {
      return Self::rooted_at(env_base);
    }

    let proj_dirs = ProjectDirs::from("com", "coro", "coro").ok_or(ConfigError::Directories)?;
    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(Self { base_dir: config_dir.clone(), config_dir })
  }

  /// Construye las rutas bajo una raíz explícita, sin mirar el entorno.
  pub fn rooted_at(base: impl Into<PathBuf>) -> Result<Self, ConfigError> {
    let base_dir = base.into();
    let config_dir = base_dir.join("config");
    std::fs::create_dir_all(&config_dir)?;

    Ok(Self { base_dir, config_dir })
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("coro.toml")
  }
}
