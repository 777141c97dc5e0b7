use coro_config::{CatalogConfig, CoroPaths, TomlConfigBackend};
use coro_core::{Catalog, CoreError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CoreError> {
  let backend = TomlConfigBackend::new(CoroPaths::new()?);
  let config = CatalogConfig::load(&backend)?;

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
    )
    .init();

  let mut catalog = Catalog::with_config(&config);

  let rap = catalog.create_genre_named("rap");
  let adele = catalog.create_artist_named("Adele");
  let kendrick = catalog.create_artist_named("Kendrick Lamar");

  let hello = catalog.create_song_named("Hello");
  catalog.add_song(adele, hello)?;

  for title in ["DNA.", "HUMBLE."] {
    let song = catalog.create_song_named(title);
    catalog.set_song_genre(song, Some(rap))?;
    catalog.add_song(kendrick, song)?;
  }

  println!("------------------------------------------------");
  for artist in catalog.artists() {
    let songs: Vec<_> =
      catalog.artist_songs(artist.id())?.iter().filter_map(|s| s.name.clone()).collect();
    println!(
      "{} | canciones: {:?} | géneros: {}",
      display_name(&artist.name),
      songs,
      artist.genres().len()
    );
  }
  for genre in catalog.genres() {
    let artists: Vec<_> =
      catalog.genre_artists(genre.id())?.iter().map(|a| display_name(&a.name)).collect();
    let kind = genre.kind().map(|k| k.to_string()).unwrap_or_default();
    println!("{} ({kind}) | artistas: {:?}", display_name(&genre.name), artists);
  }
  println!("Artistas: {} | Géneros: {}", catalog.artist_count(), catalog.genre_count());

  catalog.reset_genre_registry();
  println!("Géneros tras reset: {}", catalog.genre_count());
  println!("------------------------------------------------");

  Ok(())
}

fn display_name(name: &Option<String>) -> String {
  name.clone().unwrap_or_else(|| "<sin nombre>".to_string())
}
