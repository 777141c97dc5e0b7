use crate::domain::ids::{ArtistId, GenreId, SongId};
use serde::{Deserialize, Serialize};

/// La canción (Song): pertenece como mucho a un artista y a un género.
///
/// `artist` y `genre` son referencias sin propiedad. El artista sólo se fija
/// desde [`Catalog::add_song`](crate::Catalog::add_song) y el género desde
/// [`Catalog::set_song_genre`](crate::Catalog::set_song_genre).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  /// Identificador único de la canción dentro del sistema.
  id: SongId,
  /// El título de la canción.
  pub name: Option<String>,
  artist: Option<ArtistId>,
  genre: Option<GenreId>,
}

impl Song {
  pub(crate) fn new(id: SongId) -> Self {
    Self { id, name: None, artist: None, genre: None }
  }

  pub fn id(&self) -> SongId {
    self.id
  }

  pub fn artist(&self) -> Option<ArtistId> {
    self.artist
  }

  pub fn genre(&self) -> Option<GenreId> {
    self.genre
  }

  pub(crate) fn set_artist(&mut self, artist: ArtistId) {
    self.artist = Some(artist);
  }

  pub(crate) fn set_genre(&mut self, genre: Option<GenreId>) {
    self.genre = genre;
  }
}
