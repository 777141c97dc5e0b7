use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grandes familias musicales con las que se puede clasificar un
/// [`Genre`](crate::domain::genre::Genre) por su nombre.
///
/// La lista sigue la taxonomía de Discogs. No cubre subgéneros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenreKind {
  Rock,
  Electronic,
  Pop,
  FolkWorldAndCountry,
  Jazz,
  FunkSoul,
  Classical,
  HipHop,
  Latin,
  Reggae,
  Blues,
}

impl fmt::Display for GenreKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      GenreKind::Rock => "Rock",
      GenreKind::Electronic => "Electronic",
      GenreKind::Pop => "Pop",
      GenreKind::FolkWorldAndCountry => "Folk, World, & Country",
      GenreKind::Jazz => "Jazz",
      GenreKind::FunkSoul => "Funk / Soul",
      GenreKind::Classical => "Classical",
      GenreKind::HipHop => "Hip Hop",
      GenreKind::Latin => "Latin",
      GenreKind::Reggae => "Reggae",
      GenreKind::Blues => "Blues",
    };
    write!(f, "{}", text)
  }
}

/// Error producido cuando una cadena no puede convertirse en [`GenreKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid genre: {input}")]
pub struct GenreParseError {
  pub input: String,
}

impl FromStr for GenreKind {
  type Err = GenreParseError;

  /// Normaliza la cadena (minúsculas, sin espacios, guiones ni separadores)
  /// y acepta algunos alias habituales como `rap` o `r&b`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase().replace(['-', ' ', ',', '&', '/'], "");

    let kind = match normalized.as_str() {
      "rock" | "punk" | "metal" => GenreKind::Rock,
      "electronic" | "electronica" | "edm" => GenreKind::Electronic,
      "pop" => GenreKind::Pop,
      "folkworldandcountry" | "folkworldcountry" | "folk" | "country" => {
        GenreKind::FolkWorldAndCountry
      }
      "jazz" => GenreKind::Jazz,
      "funksoul" | "funk" | "soul" | "rb" | "rnb" => GenreKind::FunkSoul,
      "classical" | "clasica" => GenreKind::Classical,
      "hiphop" | "rap" => GenreKind::HipHop,
      "latin" | "latino" => GenreKind::Latin,
      "reggae" => GenreKind::Reggae,
      "blues" => GenreKind::Blues,
      _ => return Err(GenreParseError { input: s.to_string() }),
    };

    Ok(kind)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_aliases_and_separators() {
    assert_eq!("Hip-Hop".parse::<GenreKind>(), Ok(GenreKind::HipHop));
    assert_eq!(" RAP ".parse::<GenreKind>(), Ok(GenreKind::HipHop));
    assert_eq!("R&B".parse::<GenreKind>(), Ok(GenreKind::FunkSoul));
    assert_eq!("Folk, World, & Country".parse::<GenreKind>(), Ok(GenreKind::FolkWorldAndCountry));
  }

  #[test]
  fn display_parses_back() {
    for kind in [GenreKind::FunkSoul, GenreKind::HipHop, GenreKind::FolkWorldAndCountry] {
      assert_eq!(kind.to_string().parse::<GenreKind>(), Ok(kind));
    }
  }

  #[test]
  fn unknown_keeps_original_input() {
    let err = "Zarzuela".parse::<GenreKind>().unwrap_err();
    assert_eq!(err.input, "Zarzuela");
    assert_eq!(err.to_string(), "invalid genre: Zarzuela");
  }
}
