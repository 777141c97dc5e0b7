use crate::paths::{ConfigError, CoroPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

// Escritura con toml_edit para no perder los comentarios del usuario.
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: CoroPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: CoroPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &CoroPaths {
    &self.paths
  }

  /// Igual que [`ConfigBackend::load_section`], pero un archivo o sección
  /// inexistente devuelve `T::default()` en lugar de error.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        return Ok(T::default());
      }
      Err(e) => return Err(e.into()),
    };

    let toml_val: toml::Table = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    decode_section(section, table)
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table
    .clone()
    .try_into()
    .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let toml_val: toml::Table = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Documento actual, o uno vacío si todavía no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) La sección se serializa sin cabecera ("foo = 1\nbar = 2\n").
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    // 3) Sustituir sólo esta sección; el resto del documento queda intacto.
    doc[section] = section_item;

    atomic_write_str(&path, &doc.to_string())?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Sample {
    level: String,
    size: u32,
  }

  fn backend_in(dir: &Path) -> TomlConfigBackend {
    TomlConfigBackend::new(CoroPaths::rooted_at(dir).unwrap())
  }

  #[test]
  fn missing_file_yields_default() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    let loaded: Sample = backend.load_section_with_default("sample").unwrap();
    assert_eq!(loaded, Sample::default());
  }

  #[test]
  fn missing_section_is_an_error_without_default() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    fs::write(backend.paths().config_file(), "[other]\nx = 1\n").unwrap();

    let res: Result<Sample, _> = backend.load_section("sample");
    assert!(matches!(res, Err(ConfigError::Other(_))));
  }

  #[test]
  fn save_keeps_comments_of_other_sections() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    let file = backend.paths().config_file();
    fs::write(&file, "# mantener\n[other]\nx = 1\n").unwrap();

    let value = Sample { level: "debug".into(), size: 8 };
    backend.save_section("sample", &value).unwrap();

    let raw = fs::read_to_string(&file).unwrap();
    assert!(raw.contains("# mantener"));
    assert!(raw.contains("[sample]"));

    let loaded: Sample = backend.load_section("sample").unwrap();
    assert_eq!(loaded, value);
  }
}
