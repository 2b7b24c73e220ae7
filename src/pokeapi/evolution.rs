//! Evolution tree flattening.

use super::api_types::ChainLink;
use super::types::{extract_id_from_url, EvolutionEntry};

/// Flatten an evolution tree into display order.
///
/// Pre-order: a node comes before its descendants, and sibling subtrees
/// keep the order of `evolves_to`. Every node is emitted, duplicates
/// included.
pub fn flatten_evolution_chain(root: &ChainLink) -> Vec<EvolutionEntry> {
  let mut result = Vec::new();
  let mut stack = vec![root];

  while let Some(link) = stack.pop() {
    result.push(EvolutionEntry {
      name: link.species.name.clone(),
      id: extract_id_from_url(&link.species.url),
    });

    // Reversed so the first child is popped next
    stack.extend(link.evolves_to.iter().rev());
  }

  result
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::pokeapi::api_types::NamedResource;

  fn link(name: &str, id: u32, evolves_to: Vec<ChainLink>) -> ChainLink {
    ChainLink {
      species: NamedResource {
        name: name.to_string(),
        url: format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id),
      },
      evolves_to,
    }
  }

  fn names(entries: &[EvolutionEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
  }

  #[test]
  fn test_single_node() {
    let chain = link("ditto", 132, vec![]);
    assert_eq!(
      flatten_evolution_chain(&chain),
      vec![EvolutionEntry {
        name: "ditto".to_string(),
        id: 132
      }]
    );
  }

  #[test]
  fn test_preorder_children_in_array_order() {
    // A -> [B, C], B -> [D]
    let chain = link(
      "a",
      1,
      vec![link("b", 2, vec![link("d", 4, vec![])]), link("c", 3, vec![])],
    );

    let flat = flatten_evolution_chain(&chain);

    assert_eq!(names(&flat), vec!["a", "b", "d", "c"]);
    assert_eq!(
      flat.iter().map(|e| e.id).collect::<Vec<_>>(),
      vec![1, 2, 4, 3]
    );
  }

  #[test]
  fn test_linear_chain() {
    let chain = link(
      "bulbasaur",
      1,
      vec![link("ivysaur", 2, vec![link("venusaur", 3, vec![])])],
    );
    assert_eq!(
      names(&flatten_evolution_chain(&chain)),
      vec!["bulbasaur", "ivysaur", "venusaur"]
    );
  }

  #[test]
  fn test_wide_branching() {
    let chain = link(
      "eevee",
      133,
      vec![
        link("vaporeon", 134, vec![]),
        link("jolteon", 135, vec![]),
        link("flareon", 136, vec![]),
      ],
    );
    assert_eq!(
      names(&flatten_evolution_chain(&chain)),
      vec!["eevee", "vaporeon", "jolteon", "flareon"]
    );
  }

  #[test]
  fn test_flatten_is_repeatable() {
    let chain = link(
      "a",
      1,
      vec![link("b", 2, vec![link("d", 4, vec![])]), link("c", 3, vec![])],
    );
    assert_eq!(flatten_evolution_chain(&chain), flatten_evolution_chain(&chain));
  }

  #[test]
  fn test_duplicates_are_kept_and_bad_urls_get_zero() {
    let mut odd = link("b", 2, vec![]);
    odd.species.url = "not-a-url".to_string();
    let chain = link("a", 1, vec![odd.clone(), odd]);

    let flat = flatten_evolution_chain(&chain);

    assert_eq!(names(&flat), vec!["a", "b", "b"]);
    assert_eq!(flat[1].id, 0);
  }
}
