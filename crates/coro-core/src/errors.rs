// crates/coro-core/src/errors.rs
use crate::domain::{ArtistId, GenreId, SongId};
use thiserror::Error;

/// Error de una operación del [`Catalog`](crate::Catalog).
///
/// Sólo aparece cuando se pasa un id que no pertenece al catálogo. Las
/// operaciones validan todos los ids antes de mutar nada.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
  #[error("unknown artist: {0}")]
  UnknownArtist(ArtistId),

  #[error("unknown song: {0}")]
  UnknownSong(SongId),

  #[error("unknown genre: {0}")]
  UnknownGenre(GenreId),
}

/// Error genérico del núcleo de Coro.
///
/// Las capas superiores (binarios, tests de integración) deberían mapear
/// este error a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("catalog error: {0}")]
  Catalog(#[from] CatalogError),

  #[error("config error: {0}")]
  Config(#[from] coro_config::ConfigError),
}
