use crate::domain::ids::{ArtistId, GenreId, SongId};
use serde::{Deserialize, Serialize};

/// Representa a un artista dentro del catálogo.
///
/// Las relaciones se guardan como identificadores: el artista no es dueño
/// de sus canciones ni de sus géneros, sólo los referencia. Ambas listas se
/// rellenan exclusivamente a través de [`Catalog::add_song`](crate::Catalog::add_song).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
  /// Identificador único del artista.
  id: ArtistId,

  /// Nombre del artista, si se ha asignado.
  pub name: Option<String>,

  /// Canciones añadidas, en orden de llegada.
  songs: Vec<SongId>,

  /// Género de cada canción añadida, en el mismo orden que `songs`.
  ///
  /// No se deduplica y admite `None` para canciones sin género.
  genres: Vec<Option<GenreId>>,
}

impl Artist {
  pub(crate) fn new(id: ArtistId) -> Self {
    Self { id, name: None, songs: Vec::new(), genres: Vec::new() }
  }

  pub fn id(&self) -> ArtistId {
    self.id
  }

  pub fn songs(&self) -> &[SongId] {
    &self.songs
  }

  pub fn genres(&self) -> &[Option<GenreId>] {
    &self.genres
  }

  /// Registra la canción y el género que traía en el momento de añadirla.
  pub(crate) fn push_song(&mut self, song: SongId, genre: Option<GenreId>) {
    self.songs.push(song);
    self.genres.push(genre);
  }
}
