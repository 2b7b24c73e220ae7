//! Serde-deserializable types matching PokéAPI responses.
//!
//! Only the fields the Pokédex displays are modelled; everything else in
//! the payload is ignored on decode. Nullable upstream fields are `Option`s.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use super::error::RemoteError;

/// Convert a cached JSON payload into a typed record.
pub fn decode<T: DeserializeOwned>(url: &str, value: Value) -> Result<T, RemoteError> {
  serde_json::from_value(value).map_err(|e| RemoteError::Decode {
    url: url.to_string(),
    message: e.to_string(),
  })
}

// ============================================================================
// Common nested types
// ============================================================================

/// `{ name, url }` reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
  pub name: String,
  #[serde(default)]
  pub url: String,
}

/// `{ url }` reference without a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
  pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
  pub language: NamedResource,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
  pub flavor_text: String,
  pub language: NamedResource,
}

// ============================================================================
// List endpoint
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ApiListResponse {
  #[serde(default)]
  pub count: u32,
  pub next: Option<String>,
  pub previous: Option<String>,
  #[serde(default)]
  pub results: Vec<NamedResource>,
}

// ============================================================================
// /pokemon/{idOrName}
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
  pub id: u32,
  pub name: String,
  #[serde(default)]
  pub height: u32,
  #[serde(default)]
  pub weight: u32,
  #[serde(default)]
  pub types: Vec<PokemonType>,
  #[serde(default)]
  pub abilities: Vec<PokemonAbility>,
  #[serde(default)]
  pub sprites: Sprites,
  #[serde(default)]
  pub cries: Cries,
  #[serde(default)]
  pub moves: Vec<PokemonMove>,
  #[serde(default)]
  pub stats: Vec<PokemonStat>,
  pub species: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
  pub slot: u8,
  #[serde(rename = "type")]
  pub kind: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonAbility {
  pub ability: NamedResource,
  #[serde(default)]
  pub is_hidden: bool,
  pub slot: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
  pub front_default: Option<String>,
  pub back_default: Option<String>,
  pub front_shiny: Option<String>,
  pub back_shiny: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cries {
  pub latest: Option<String>,
  pub legacy: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonMove {
  #[serde(rename = "move")]
  pub resource: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
  pub base_stat: u32,
  pub stat: NamedResource,
}

// ============================================================================
// /pokemon-species/{idOrName}
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonSpecies {
  pub id: u32,
  pub name: String,
  #[serde(default)]
  pub names: Vec<LocalizedName>,
  #[serde(default)]
  pub flavor_text_entries: Vec<FlavorTextEntry>,
  pub evolution_chain: Option<ResourceLink>,
}

// ============================================================================
// Evolution chain (absolute URL from a species)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionChain {
  pub id: u32,
  pub chain: ChainLink,
}

/// One node of an evolution tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
  pub species: NamedResource,
  #[serde(default)]
  pub evolves_to: Vec<ChainLink>,
}

// ============================================================================
// /move/{idOrName}
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Move {
  pub id: u32,
  pub name: String,
  #[serde(default)]
  pub names: Vec<LocalizedName>,
  pub power: Option<u32>,
  pub pp: Option<u32>,
  pub accuracy: Option<u32>,
  #[serde(rename = "type")]
  pub move_type: NamedResource,
  pub damage_class: Option<NamedResource>,
}
