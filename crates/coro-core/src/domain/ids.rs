use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador único de un [`Artist`](crate::domain::artist::Artist).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtistId(Uuid);

impl ArtistId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    ArtistId(Uuid::new_v4())
  }

  /// Construye un `ArtistId` a partir de un `Uuid` existente.
  pub fn from_uuid(u: Uuid) -> Self {
    ArtistId(u)
  }

  /// Devuelve el `Uuid` interno.
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for ArtistId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Uuid> for ArtistId {
  fn from(u: Uuid) -> Self {
    ArtistId(u)
  }
}

impl From<ArtistId> for Uuid {
  fn from(id: ArtistId) -> Self {
    id.0
  }
}

impl fmt::Display for ArtistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongId(Uuid);

impl SongId {
  pub fn new() -> Self {
    SongId(Uuid::new_v4())
  }

  pub fn from_uuid(u: Uuid) -> Self {
    SongId(u)
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for SongId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Uuid> for SongId {
  fn from(u: Uuid) -> Self {
    SongId(u)
  }
}

impl From<SongId> for Uuid {
  fn from(id: SongId) -> Self {
    id.0
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Identificador único de un [`Genre`](crate::domain::genre::Genre) del catálogo.
///
/// Cada género creado en el catálogo es una entidad propia, aunque dos
/// géneros compartan nombre o clasificación ([`GenreKind`](crate::domain::GenreKind)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenreId(Uuid);

impl GenreId {
  pub fn new() -> Self {
    GenreId(Uuid::new_v4())
  }

  pub fn from_uuid(u: Uuid) -> Self {
    GenreId(u)
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for GenreId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Uuid> for GenreId {
  fn from(u: Uuid) -> Self {
    GenreId(u)
  }
}

impl From<GenreId> for Uuid {
  fn from(id: GenreId) -> Self {
    id.0
  }
}

impl fmt::Display for GenreId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ids_keep_their_uuid() {
    let u = Uuid::new_v4();
    let id = GenreId::from_uuid(u);

    assert_eq!(id.as_uuid(), u);
    assert_eq!(Uuid::from(id), u);
    assert_eq!(id.to_string(), u.to_string());
  }

  #[test]
  fn new_ids_are_distinct() {
    assert_ne!(ArtistId::new(), ArtistId::new());
    assert_ne!(SongId::new(), SongId::new());
  }
}
