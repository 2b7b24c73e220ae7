//! Pokédex data access: PokéAPI client, response cache, localization.

pub mod cache;
pub mod config;
pub mod detail;
pub mod i18n;
pub mod logging;
pub mod pokeapi;
pub mod render;
