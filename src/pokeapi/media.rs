//! Sprite and cry URLs built from the PokéAPI asset repositories.
//!
//! These are plain string templates; nothing here touches the network or
//! the response cache.

const SPRITE_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";
const CRY_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/cries/main/cries/pokemon";

/// Recording variant of a Pokémon cry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CryVariant {
  #[default]
  Latest,
  Legacy,
}

impl CryVariant {
  fn path(self) -> &'static str {
    match self {
      CryVariant::Latest => "latest",
      CryVariant::Legacy => "legacy",
    }
  }
}

/// Artwork URL for a Pokémon id.
pub fn sprite_url(id: u32, shiny: bool, back: bool) -> String {
  let shiny_path = if shiny { "shiny/" } else { "" };
  let direction = if back { "back/" } else { "" };
  format!("{}/{}{}{}.png", SPRITE_BASE, shiny_path, direction, id)
}

/// Audio URL for a Pokémon's cry.
pub fn cry_url(id: u32, variant: CryVariant) -> String {
  format!("{}/{}/{}.ogg", CRY_BASE, variant.path(), id)
}
