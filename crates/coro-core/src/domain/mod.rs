pub mod artist;
pub mod genre;
pub mod genre_kind;
pub mod ids;
pub mod song;

pub use artist::Artist;
pub use genre::Genre;
pub use genre_kind::{GenreKind, GenreParseError};
pub use ids::{ArtistId, GenreId, SongId};
pub use song::Song;
