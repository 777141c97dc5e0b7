use std::collections::HashMap;

use coro_config::CatalogConfig;
use tracing::debug;

use crate::domain::{Artist, ArtistId, Genre, GenreId, Song, SongId};
use crate::errors::CatalogError;
use crate::registry::Registry;

/// Dueño de todas las entidades y de los registros de artistas y géneros.
///
/// Las relaciones entre entidades se mantienen aquí: cada operación que
/// enlaza dos entidades actualiza también las relaciones inversas y
/// transitivas. No hay estado global; cada `Catalog` es independiente.
#[derive(Debug)]
pub struct Catalog {
  artists: HashMap<ArtistId, Artist>,
  songs: HashMap<SongId, Song>,
  genres: HashMap<GenreId, Genre>,
  artist_registry: Registry<ArtistId>,
  genre_registry: Registry<GenreId>,
}

impl Default for Catalog {
  fn default() -> Self {
    Self::new()
  }
}

impl Catalog {
  pub fn new() -> Self {
    Self::with_config(&CatalogConfig::default())
  }

  pub fn with_config(config: &CatalogConfig) -> Self {
    Self {
      artists: HashMap::with_capacity(config.artist_capacity),
      songs: HashMap::with_capacity(config.song_capacity),
      genres: HashMap::with_capacity(config.genre_capacity),
      artist_registry: Registry::with_capacity("artist", config.artist_capacity),
      genre_registry: Registry::with_capacity("genre", config.genre_capacity),
    }
  }

  // -------- Creación --------

  /// Crea un artista sin canciones ni géneros y lo añade al registro.
  pub fn create_artist(&mut self) -> ArtistId {
    let id = ArtistId::new();
    self.artists.insert(id, Artist::new(id));
    self.artist_registry.register(id);
    id
  }

  pub fn create_artist_named(&mut self, name: impl Into<String>) -> ArtistId {
    let id = self.create_artist();
    if let Some(artist) = self.artists.get_mut(&id) {
      artist.name = Some(name.into());
    }
    id
  }

  /// Crea una canción sin artista ni género. Las canciones no tienen registro.
  pub fn create_song(&mut self) -> SongId {
    let id = SongId::new();
    self.songs.insert(id, Song::new(id));
    id
  }

  pub fn create_song_named(&mut self, name: impl Into<String>) -> SongId {
    let id = self.create_song();
    if let Some(song) = self.songs.get_mut(&id) {
      song.name = Some(name.into());
    }
    id
  }

  /// Crea un género vacío y lo añade al registro.
  pub fn create_genre(&mut self) -> GenreId {
    let id = GenreId::new();
    self.genres.insert(id, Genre::new(id));
    self.genre_registry.register(id);
    id
  }

  pub fn create_genre_named(&mut self, name: impl Into<String>) -> GenreId {
    let id = self.create_genre();
    if let Some(genre) = self.genres.get_mut(&id) {
      genre.name = Some(name.into());
    }
    id
  }

  // -------- Atributos --------

  /// Cambia el nombre de un artista. Es el único atributo editable desde
  /// fuera: las relaciones sólo cambian con `add_song` y `set_song_genre`.
  pub fn set_artist_name(
    &mut self,
    artist: ArtistId,
    name: Option<String>,
  ) -> Result<(), CatalogError> {
    let artist_ref = self.artists.get_mut(&artist).ok_or(CatalogError::UnknownArtist(artist))?;
    artist_ref.name = name;
    Ok(())
  }

  pub fn set_song_name(
    &mut self,
    song: SongId,
    name: Option<String>,
  ) -> Result<(), CatalogError> {
    let song_ref = self.songs.get_mut(&song).ok_or(CatalogError::UnknownSong(song))?;
    song_ref.name = name;
    Ok(())
  }

  pub fn set_genre_name(
    &mut self,
    genre: GenreId,
    name: Option<String>,
  ) -> Result<(), CatalogError> {
    let genre_ref = self.genres.get_mut(&genre).ok_or(CatalogError::UnknownGenre(genre))?;
    genre_ref.name = name;
    Ok(())
  }

  // -------- Relaciones --------

  /// Asigna (o quita, con `None`) el género de una canción.
  ///
  /// Postcondiciones:
  /// - `song.genre() == genre`
  /// - si `genre` es `Some(g)`, la canción se añade al final de `g.songs()`,
  ///   aunque ya estuviera.
  ///
  /// El género anterior no se toca: si la canción cambia de género sigue
  /// apareciendo en las canciones del viejo.
  pub fn set_song_genre(
    &mut self,
    song: SongId,
    genre: Option<GenreId>,
  ) -> Result<(), CatalogError> {
    let song_ref = self.songs.get_mut(&song).ok_or(CatalogError::UnknownSong(song))?;
    let genre_ref = match genre {
      Some(g) => Some(self.genres.get_mut(&g).ok_or(CatalogError::UnknownGenre(g))?),
      None => None,
    };

    song_ref.set_genre(genre);
    if let Some(genre_ref) = genre_ref {
      genre_ref.push_song(song);
      debug!(%song, genre = %genre_ref.id(), "song registered in genre");
    }

    Ok(())
  }

  /// Añade una canción a un artista y propaga la relación.
  ///
  /// Postcondiciones:
  /// 1. la canción queda al final de `artist.songs()`
  /// 2. el género actual de la canción (o `None`) queda al final de
  ///    `artist.genres()`, sin deduplicar
  /// 3. `song.artist() == Some(artist)`
  /// 4. si la canción tiene género, el artista aparece exactamente una vez
  ///    en `genre.artists()`
  ///
  /// Si la canción ya pertenecía a otro artista, el anterior la conserva en
  /// su lista.
  pub fn add_song(&mut self, artist: ArtistId, song: SongId) -> Result<(), CatalogError> {
    let artist_ref = self.artists.get_mut(&artist).ok_or(CatalogError::UnknownArtist(artist))?;
    let song_ref = self.songs.get_mut(&song).ok_or(CatalogError::UnknownSong(song))?;
    let genre = song_ref.genre();
    let genre_ref = match genre {
      Some(g) => Some(self.genres.get_mut(&g).ok_or(CatalogError::UnknownGenre(g))?),
      None => None,
    };

    artist_ref.push_song(song, genre);
    song_ref.set_artist(artist);
    debug!(%artist, %song, "song added to artist");

    if let Some(genre_ref) = genre_ref
      && genre_ref.add_artist(artist)
    {
      debug!(%artist, genre = %genre_ref.id(), "artist registered in genre");
    }

    Ok(())
  }

  /// Añade un artista a un género sin repetirlo.
  pub fn add_artist(&mut self, genre: GenreId, artist: ArtistId) -> Result<(), CatalogError> {
    if !self.artists.contains_key(&artist) {
      return Err(CatalogError::UnknownArtist(artist));
    }
    let genre_ref = self.genres.get_mut(&genre).ok_or(CatalogError::UnknownGenre(genre))?;

    if genre_ref.add_artist(artist) {
      debug!(%artist, %genre, "artist registered in genre");
    }
    Ok(())
  }

  // -------- Consulta por id --------

  pub fn artist(&self, id: ArtistId) -> Option<&Artist> {
    self.artists.get(&id)
  }

  pub fn song(&self, id: SongId) -> Option<&Song> {
    self.songs.get(&id)
  }

  pub fn genre(&self, id: GenreId) -> Option<&Genre> {
    self.genres.get(&id)
  }

  // -------- Recorridos --------

  pub fn artist_songs(&self, artist: ArtistId) -> Result<Vec<&Song>, CatalogError> {
    let artist_ref = self.artist(artist).ok_or(CatalogError::UnknownArtist(artist))?;
    Ok(artist_ref.songs().iter().filter_map(|id| self.songs.get(id)).collect())
  }

  /// Géneros del artista resueltos, en orden y con repetidos. Las canciones
  /// sin género no aportan nada.
  pub fn artist_genres(&self, artist: ArtistId) -> Result<Vec<&Genre>, CatalogError> {
    let artist_ref = self.artist(artist).ok_or(CatalogError::UnknownArtist(artist))?;
    Ok(artist_ref.genres().iter().flatten().filter_map(|id| self.genres.get(id)).collect())
  }

  pub fn genre_songs(&self, genre: GenreId) -> Result<Vec<&Song>, CatalogError> {
    let genre_ref = self.genre(genre).ok_or(CatalogError::UnknownGenre(genre))?;
    Ok(genre_ref.songs().iter().filter_map(|id| self.songs.get(id)).collect())
  }

  pub fn genre_artists(&self, genre: GenreId) -> Result<Vec<&Artist>, CatalogError> {
    let genre_ref = self.genre(genre).ok_or(CatalogError::UnknownGenre(genre))?;
    Ok(genre_ref.artists().iter().filter_map(|id| self.artists.get(id)).collect())
  }

  // -------- Registros --------

  /// Artistas registrados, en orden de creación.
  pub fn artists(&self) -> impl Iterator<Item = &Artist> + '_ {
    self.artist_registry.iter().filter_map(|id| self.artists.get(&id))
  }

  pub fn artist_count(&self) -> usize {
    self.artist_registry.count()
  }

  /// Vacía el registro de artistas. Los artistas siguen accesibles por id y
  /// conservan sus relaciones.
  pub fn reset_artist_registry(&mut self) {
    self.artist_registry.reset();
  }

  pub fn artist_registry(&self) -> &Registry<ArtistId> {
    &self.artist_registry
  }

  pub fn genres(&self) -> impl Iterator<Item = &Genre> + '_ {
    self.genre_registry.iter().filter_map(|id| self.genres.get(&id))
  }

  pub fn genre_count(&self) -> usize {
    self.genre_registry.count()
  }

  pub fn reset_genre_registry(&mut self) {
    self.genre_registry.reset();
  }

  pub fn genre_registry(&self) -> &Registry<GenreId> {
    &self.genre_registry
  }

  /// Primer artista registrado con ese nombre exacto.
  ///
  /// Sólo busca en el registro: tras un reset no encuentra nada.
  pub fn find_artist_by_name(&self, name: &str) -> Option<&Artist> {
    self.artists().find(|a| a.name.as_deref() == Some(name))
  }

  pub fn find_genre_by_name(&self, name: &str) -> Option<&Genre> {
    self.genres().find(|g| g.name.as_deref() == Some(name))
  }
}
