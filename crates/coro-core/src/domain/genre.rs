use crate::domain::genre_kind::GenreKind;
use crate::domain::ids::{ArtistId, GenreId, SongId};
use serde::{Deserialize, Serialize};

/// Un género del catálogo, con sus canciones y los artistas que lo tocan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
  id: GenreId,
  pub name: Option<String>,

  /// Canciones asignadas a este género. Admite repetidos.
  songs: Vec<SongId>,

  /// Artistas del género, sin repetidos y en orden de primera aparición.
  artists: Vec<ArtistId>,
}

impl Genre {
  pub(crate) fn new(id: GenreId) -> Self {
    Self { id, name: None, songs: Vec::new(), artists: Vec::new() }
  }

  pub fn id(&self) -> GenreId {
    self.id
  }

  pub fn songs(&self) -> &[SongId] {
    &self.songs
  }

  pub fn artists(&self) -> &[ArtistId] {
    &self.artists
  }

  /// Clasifica el género según su nombre, si coincide con la taxonomía conocida.
  pub fn kind(&self) -> Option<GenreKind> {
    self.name.as_deref()?.parse().ok()
  }

  pub(crate) fn push_song(&mut self, song: SongId) {
    self.songs.push(song);
  }

  /// Añade el artista y deja la lista sin duplicados, conservando el orden
  /// de la primera aparición. Llamarlo dos veces con el mismo artista no
  /// cambia nada.
  pub(crate) fn add_artist(&mut self, artist: ArtistId) -> bool {
    if self.artists.contains(&artist) {
      return false;
    }
    self.artists.push(artist);
    true
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add_artist_is_idempotent() {
    let mut genre = Genre::new(GenreId::new());
    let a = ArtistId::new();
    let b = ArtistId::new();

    assert!(genre.add_artist(a));
    assert!(genre.add_artist(b));
    assert!(!genre.add_artist(a));

    assert_eq!(genre.artists(), &[a, b]);
  }

  #[test]
  fn kind_follows_name() {
    let mut genre = Genre::new(GenreId::new());
    assert_eq!(genre.kind(), None);

    genre.name = Some("rap".into());
    assert_eq!(genre.kind(), Some(GenreKind::HipHop));

    genre.name = Some("zarzuela".into());
    assert_eq!(genre.kind(), None);
  }
}
