//! PokéAPI client with transparent response caching.

use color_eyre::{eyre::eyre, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use crate::cache::ResponseCache;
use crate::config::Config;

use super::api_types::{decode, ApiListResponse, EvolutionChain, Move, Pokemon, PokemonSpecies};
use super::error::RemoteError;
use super::transport::{HttpTransport, Transport};
use super::types::ListItem;

/// Size of the full national catalog; the bulk list asks for this many.
pub const CATALOG_SIZE: u32 = 1302;

/// Page size used when the caller has no preference.
pub const DEFAULT_PAGE_SIZE: u32 = 60;

/// PokéAPI client with transparent caching support.
///
/// Every GET goes through a shared [`ResponseCache`] keyed by the full
/// request URL. Clones share the cache and the transport.
pub struct PokeApiClient<T: Transport = HttpTransport> {
  transport: Arc<T>,
  cache: Arc<ResponseCache>,
  base_url: Url,
}

impl PokeApiClient<HttpTransport> {
  /// Create a client from configuration.
  pub fn new(config: &Config) -> Result<Self> {
    let transport = HttpTransport::new(&config.api)?;
    let cache = ResponseCache::new(config.cache.ttl()?);

    Self::with_transport(transport, Arc::new(cache), &config.api.base_url)
  }
}

impl<T: Transport> PokeApiClient<T> {
  /// Create a client over an arbitrary transport and cache.
  pub fn with_transport(transport: T, cache: Arc<ResponseCache>, base_url: &str) -> Result<Self> {
    let base_url =
      Url::parse(base_url).map_err(|e| eyre!("Invalid base URL '{}': {}", base_url, e))?;
    if base_url.cannot_be_a_base() {
      return Err(eyre!("Invalid base URL '{}'", base_url));
    }

    Ok(Self {
      transport: Arc::new(transport),
      cache,
      base_url,
    })
  }

  pub fn cache(&self) -> &ResponseCache {
    &self.cache
  }

  #[cfg(test)]
  pub(crate) fn transport(&self) -> &T {
    &self.transport
  }

  /// GET `url` as JSON, answering from the cache when possible.
  ///
  /// On a miss exactly one request is made and a successful body is stored
  /// under `url`. Failures are returned as-is and nothing is cached.
  pub async fn fetch_with_cache(&self, url: &str) -> Result<Value, RemoteError> {
    if let Some(cached) = self.cache.get(url) {
      debug!(url, "cache hit");
      return Ok(cached);
    }

    debug!(url, "cache miss");
    let data = self.transport.get_json(url).await?;
    self.cache.set(url, data.clone());
    Ok(data)
  }

  async fn fetch_typed<D: DeserializeOwned>(&self, url: &str) -> Result<D, RemoteError> {
    let value = self.fetch_with_cache(url).await?;
    decode(url, value)
  }

  /// One page of the catalog, numbered by the ids in the resource URLs.
  ///
  /// Loading is best-effort: any failure yields an empty page.
  pub async fn fetch_pokemon_page(&self, offset: u32, limit: u32) -> Vec<ListItem> {
    let mut url = self.endpoint(&["pokemon"]);
    url
      .query_pairs_mut()
      .append_pair("offset", &offset.to_string())
      .append_pair("limit", &limit.to_string());

    match self.fetch_typed::<ApiListResponse>(url.as_str()).await {
      Ok(response) => response
        .results
        .into_iter()
        .map(ListItem::from_resource)
        .collect(),
      Err(e) => {
        warn!(error = %e, offset, limit, "Error fetching Pokemon page");
        Vec::new()
      }
    }
  }

  /// The whole catalog, numbered by position (first entry is 1).
  ///
  /// Ids here can differ from [`fetch_pokemon_page`] ids wherever the
  /// upstream numbering has gaps. Failures yield an empty list.
  ///
  /// [`fetch_pokemon_page`]: PokeApiClient::fetch_pokemon_page
  pub async fn fetch_all_pokemon(&self) -> Vec<ListItem> {
    let mut url = self.endpoint(&["pokemon"]);
    url
      .query_pairs_mut()
      .append_pair("limit", &CATALOG_SIZE.to_string());

    match self.fetch_typed::<ApiListResponse>(url.as_str()).await {
      Ok(response) => response
        .results
        .into_iter()
        .enumerate()
        .map(|(index, resource)| ListItem::from_position(resource, index))
        .collect(),
      Err(e) => {
        warn!(error = %e, "Error fetching all Pokemon");
        Vec::new()
      }
    }
  }

  /// Get a Pokémon by number or lowercase name.
  pub async fn fetch_pokemon(&self, id_or_name: impl Display) -> Result<Pokemon, RemoteError> {
    let url = self.endpoint(&["pokemon", &id_or_name.to_string()]);
    self.fetch_typed(url.as_str()).await
  }

  /// Get species data (localized names, flavor text, evolution chain link).
  pub async fn fetch_pokemon_species(
    &self,
    id_or_name: impl Display,
  ) -> Result<PokemonSpecies, RemoteError> {
    let url = self.endpoint(&["pokemon-species", &id_or_name.to_string()]);
    self.fetch_typed(url.as_str()).await
  }

  /// Get a move by number or slug.
  pub async fn fetch_move(&self, id_or_name: impl Display) -> Result<Move, RemoteError> {
    let url = self.endpoint(&["move", &id_or_name.to_string()]);
    self.fetch_typed(url.as_str()).await
  }

  /// Get an evolution chain by the absolute URL a species points to.
  pub async fn fetch_evolution_chain(&self, url: &str) -> Result<EvolutionChain, RemoteError> {
    self.fetch_typed(url).await
  }

  fn endpoint(&self, segments: &[&str]) -> Url {
    let mut url = self.base_url.clone();
    // Only fails for cannot-be-a-base URLs, rejected in the constructor
    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(segments);
    }
    url
  }
}

impl<T: Transport> Clone for PokeApiClient<T> {
  fn clone(&self) -> Self {
    Self {
      transport: Arc::clone(&self.transport),
      cache: Arc::clone(&self.cache),
      base_url: self.base_url.clone(),
    }
  }
}
