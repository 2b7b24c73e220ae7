//! Everything the detail view shows about one Pokémon.
//!
//! This is call-site logic on top of the client: it fans out concurrent
//! lookups, correlates their results by position, and throttles move
//! lookups in small batches to go easy on the public API.

use futures::future::join_all;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::MovesConfig;
use crate::i18n::{localized_flavor_text, localized_name};
use crate::pokeapi::api_types::{Move, Pokemon, PokemonSpecies};
use crate::pokeapi::{flatten_evolution_chain, PokeApiClient, RemoteError, Transport};

/// One step of an evolution line, with its name in the display language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionMember {
  pub name: String,
  pub id: u32,
  pub display_name: String,
}

#[derive(Debug, Clone)]
pub struct PokemonDetail {
  pub pokemon: Pokemon,
  pub species: PokemonSpecies,
  pub display_name: String,
  pub flavor_text: String,
  pub evolution: Vec<EvolutionMember>,
}

impl PokemonDetail {
  /// Load entity, species and evolution line.
  ///
  /// Fails only if the entity or its species cannot be loaded; a broken
  /// evolution chain leaves `evolution` empty.
  pub async fn load<T: Transport>(
    client: &PokeApiClient<T>,
    id_or_name: &str,
    language: &str,
  ) -> Result<Self, RemoteError> {
    let (pokemon, species) = futures::try_join!(
      client.fetch_pokemon(id_or_name),
      client.fetch_pokemon_species(id_or_name)
    )?;

    let display_name = localized_name(&species.names, language);
    let flavor_text = localized_flavor_text(&species.flavor_text_entries, language);

    let evolution = match &species.evolution_chain {
      Some(link) => load_evolution_line(client, &link.url, language).await,
      None => Vec::new(),
    };

    Ok(Self {
      pokemon,
      species,
      display_name,
      flavor_text,
      evolution,
    })
  }

  /// Name to show: the localized one, else the API slug.
  pub fn title(&self) -> &str {
    if self.display_name.is_empty() {
      &self.pokemon.name
    } else {
      &self.display_name
    }
  }
}

async fn load_evolution_line<T: Transport>(
  client: &PokeApiClient<T>,
  chain_url: &str,
  language: &str,
) -> Vec<EvolutionMember> {
  let chain = match client.fetch_evolution_chain(chain_url).await {
    Ok(chain) => chain,
    Err(e) => {
      warn!(error = %e, "Error loading evolution chain");
      return Vec::new();
    }
  };

  let entries = flatten_evolution_chain(&chain.chain);

  // join_all keeps input order, so names line up with entries
  let names = join_all(entries.iter().map(|entry| async move {
    match client.fetch_pokemon_species(entry.id).await {
      Ok(species) => localized_name(&species.names, language),
      Err(e) => {
        warn!(error = %e, species = %entry.name, "Error loading species for evolution member");
        entry.name.clone()
      }
    }
  }))
  .await;

  entries
    .into_iter()
    .zip(names)
    .map(|(entry, display_name)| EvolutionMember {
      name: entry.name,
      id: entry.id,
      display_name,
    })
    .collect()
}

/// How many moves to look up and how fast
#[derive(Debug, Clone, Copy)]
pub struct MoveBatching {
  pub limit: usize,
  pub batch_size: usize,
  pub delay: Duration,
}

impl From<&MovesConfig> for MoveBatching {
  fn from(config: &MovesConfig) -> Self {
    Self {
      limit: config.limit,
      batch_size: config.batch_size,
      delay: Duration::from_millis(config.batch_delay_ms),
    }
  }
}

impl Default for MoveBatching {
  fn default() -> Self {
    Self::from(&MovesConfig::default())
  }
}

/// Fetch the first `limit` moves a Pokémon learns.
///
/// Moves are requested `batch_size` at a time with a pause between
/// batches. Moves that fail to load are left out; order follows the
/// Pokémon's move list.
pub async fn load_moves<T: Transport>(
  client: &PokeApiClient<T>,
  pokemon: &Pokemon,
  batching: MoveBatching,
) -> Vec<Move> {
  let names: Vec<&str> = pokemon
    .moves
    .iter()
    .take(batching.limit)
    .map(|m| m.resource.name.as_str())
    .collect();

  let mut moves = Vec::with_capacity(names.len());

  for (index, batch) in names.chunks(batching.batch_size.max(1)).enumerate() {
    if index > 0 && !batching.delay.is_zero() {
      tokio::time::sleep(batching.delay).await;
    }
    debug!(batch = index, size = batch.len(), "loading moves");

    let results = join_all(batch.iter().map(|name| client.fetch_move(*name))).await;
    for (name, result) in batch.iter().zip(results) {
      match result {
        Ok(mv) => moves.push(mv),
        Err(e) => debug!(error = %e, name, "skipping move"),
      }
    }
  }

  moves
}
