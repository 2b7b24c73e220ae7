//! Data access for the public PokéAPI.

pub mod api_types;
mod client;
mod error;
mod evolution;
mod media;
mod transport;
mod type_style;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{PokeApiClient, CATALOG_SIZE, DEFAULT_PAGE_SIZE};
pub use error::RemoteError;
pub use evolution::flatten_evolution_chain;
pub use media::{cry_url, sprite_url, CryVariant};
pub use transport::{HttpTransport, Transport};
pub use type_style::{type_color, type_image_path};
pub use types::{extract_id_from_url, search_pokemon, EvolutionEntry, ListItem};
