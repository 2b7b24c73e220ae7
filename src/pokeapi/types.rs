use once_cell::sync::Lazy;
use regex::Regex;

use super::api_types::NamedResource;

static TRAILING_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/(\d+)/$").unwrap());

/// Parse the numeric id at the end of a resource URL such as
/// `https://pokeapi.co/api/v2/pokemon/25/`.
///
/// Returns `0` when the URL does not end in `/<digits>/`.
pub fn extract_id_from_url(url: &str) -> u32 {
  TRAILING_ID_RE
    .captures(url)
    .and_then(|caps| caps[1].parse().ok())
    .unwrap_or(0)
}

/// Entry of a Pokémon list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
  pub name: String,
  pub url: String,
  pub id: u32,
}

impl ListItem {
  /// Build an item whose id comes from its resource URL.
  pub fn from_resource(resource: NamedResource) -> Self {
    let id = extract_id_from_url(&resource.url);
    Self {
      name: resource.name,
      url: resource.url,
      id,
    }
  }

  /// Build an item whose id is its 1-based position in the catalog.
  pub fn from_position(resource: NamedResource, index: usize) -> Self {
    Self {
      name: resource.name,
      url: resource.url,
      id: u32::try_from(index + 1).unwrap_or(u32::MAX),
    }
  }
}

/// One member of a flattened evolution line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionEntry {
  pub name: String,
  pub id: u32,
}

/// Filter an already loaded list by name or number.
///
/// A numeric query matches the item id exactly; anything else is a
/// case-insensitive substring match on the name. An empty query keeps
/// everything.
pub fn search_pokemon<'a>(items: &'a [ListItem], query: &str) -> Vec<&'a ListItem> {
  let query = query.trim();
  if query.is_empty() {
    return items.iter().collect();
  }

  if let Ok(id) = query.parse::<u32>() {
    return items.iter().filter(|item| item.id == id).collect();
  }

  let needle = query.to_lowercase();
  items
    .iter()
    .filter(|item| item.name.to_lowercase().contains(&needle))
    .collect()
}
