//! Plain-text formatting for the command-line views.

use crate::detail::PokemonDetail;
use crate::i18n::move_display_name;
use crate::pokeapi::api_types::Move;
use crate::pokeapi::{cry_url, sprite_url, CryVariant, ListItem};

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max_len: usize) -> String {
  if s.chars().count() <= max_len {
    s.to_string()
  } else {
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
  }
}

/// Collapse the line breaks and form feeds found in flavor text.
pub fn clean_flavor_text(text: &str) -> String {
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pokédex number as shown on cards, e.g. `#025`.
pub fn dex_number(id: u32) -> String {
  format!("#{:03}", id)
}

/// Height and weight come in decimeters and hectograms.
fn metric(value: u32) -> String {
  format!("{}.{}", value / 10, value % 10)
}

pub fn format_list(items: &[&ListItem]) -> String {
  items
    .iter()
    .map(|item| format!("{:>6}  {}\n", dex_number(item.id), item.name))
    .collect()
}

pub fn format_detail(detail: &PokemonDetail, shiny: bool) -> String {
  let pokemon = &detail.pokemon;
  let mut out = format!(
    "{} {} ({})\n",
    dex_number(pokemon.id),
    detail.title(),
    pokemon.name
  );

  let mut types: Vec<_> = pokemon.types.iter().collect();
  types.sort_by_key(|t| t.slot);
  let types: Vec<&str> = types.iter().map(|t| t.kind.name.as_str()).collect();
  out.push_str(&format!("Type: {}\n", types.join(" / ")));
  out.push_str(&format!(
    "Height: {} m  Weight: {} kg\n",
    metric(pokemon.height),
    metric(pokemon.weight)
  ));

  if !detail.flavor_text.is_empty() {
    out.push_str(&format!("\n{}\n", clean_flavor_text(&detail.flavor_text)));
  }

  if !pokemon.abilities.is_empty() {
    let abilities: Vec<String> = pokemon
      .abilities
      .iter()
      .map(|a| {
        if a.is_hidden {
          format!("{} (hidden)", a.ability.name)
        } else {
          a.ability.name.clone()
        }
      })
      .collect();
    out.push_str(&format!("\nAbilities: {}\n", abilities.join(", ")));
  }

  if !pokemon.stats.is_empty() {
    out.push_str("\nBase stats:\n");
    for stat in &pokemon.stats {
      out.push_str(&format!("  {:<16} {:>3}\n", stat.stat.name, stat.base_stat));
    }
  }

  if !detail.evolution.is_empty() {
    let line: Vec<String> = detail
      .evolution
      .iter()
      .map(|m| format!("{} {}", m.display_name, dex_number(m.id)))
      .collect();
    out.push_str(&format!("\nEvolution: {}\n", line.join(" -> ")));
  }

  out.push_str(&format!("\nSprite: {}\n", sprite_url(pokemon.id, shiny, false)));
  let cry = pokemon
    .cries
    .latest
    .clone()
    .unwrap_or_else(|| cry_url(pokemon.id, CryVariant::Latest));
  out.push_str(&format!("Cry:    {}\n", cry));

  out
}

fn optional(value: Option<u32>) -> String {
  value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn format_moves(moves: &[Move], language: &str) -> String {
  moves
    .iter()
    .map(|mv| {
      let class = mv
        .damage_class
        .as_ref()
        .map(|c| c.name.as_str())
        .unwrap_or("-");
      format!(
        "  {:<24} {:<10} {:<9} pow {:>3}  acc {:>3}  pp {:>2}\n",
        truncate(&move_display_name(mv, language), 24),
        mv.move_type.name,
        class,
        optional(mv.power),
        optional(mv.accuracy),
        optional(mv.pp)
      )
    })
    .collect()
}
