//! Picking display strings out of PokéAPI's per-language arrays.
//!
//! Policy, shared by names and flavor text:
//! 1. A tag outside [`Language::ALL`] is read as English.
//! 2. The first non-empty entry in that language wins.
//! 3. Otherwise the first non-empty English entry wins.
//! 4. Otherwise the result is the empty string.

use std::fmt;

use crate::pokeapi::api_types::{FlavorTextEntry, LocalizedName, Move};

/// Languages the Pokédex can display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
  #[default]
  En,
  Fr,
  Es,
  De,
  Ja,
}

impl Language {
  pub const ALL: [Language; 5] = [
    Language::En,
    Language::Fr,
    Language::Es,
    Language::De,
    Language::Ja,
  ];

  /// Exact match on a PokéAPI language tag.
  pub fn from_tag(tag: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|lang| lang.tag() == tag)
  }

  /// Like [`from_tag`](Language::from_tag), but unsupported tags become English.
  pub fn resolve(tag: &str) -> Self {
    Self::from_tag(tag).unwrap_or_default()
  }

  pub fn tag(self) -> &'static str {
    match self {
      Language::En => "en",
      Language::Fr => "fr",
      Language::Es => "es",
      Language::De => "de",
      Language::Ja => "ja",
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.tag())
  }
}

/// An entry carrying one string in one language.
pub trait Localized {
  fn language_tag(&self) -> &str;
  fn text(&self) -> &str;
}

impl Localized for LocalizedName {
  fn language_tag(&self) -> &str {
    &self.language.name
  }

  fn text(&self) -> &str {
    &self.name
  }
}

impl Localized for FlavorTextEntry {
  fn language_tag(&self) -> &str {
    &self.language.name
  }

  fn text(&self) -> &str {
    &self.flavor_text
  }
}

/// Resolve the display string for `language` from `entries`.
pub fn resolve_localized<L: Localized>(entries: &[L], language: &str) -> String {
  let target = Language::resolve(language);

  let find = |tag: &str| {
    entries
      .iter()
      .find(|e| e.language_tag() == tag)
      .filter(|e| !e.text().is_empty())
  };

  find(target.tag())
    .or_else(|| find(Language::En.tag()))
    .map(|e| e.text().to_string())
    .unwrap_or_default()
}

/// Display name of a species or move in `language`.
pub fn localized_name(names: &[LocalizedName], language: &str) -> String {
  resolve_localized(names, language)
}

/// Pokédex entry text in `language`.
pub fn localized_flavor_text(entries: &[FlavorTextEntry], language: &str) -> String {
  resolve_localized(entries, language)
}

/// Localized move name, or the slug with its first hyphen turned into a space.
pub fn move_display_name(mv: &Move, language: &str) -> String {
  let name = localized_name(&mv.names, language);
  if name.is_empty() {
    mv.name.replacen('-', " ", 1)
  } else {
    name
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::pokeapi::api_types::NamedResource;

  fn lang(tag: &str) -> NamedResource {
    NamedResource {
      name: tag.to_string(),
      url: String::new(),
    }
  }

  fn names(entries: &[(&str, &str)]) -> Vec<LocalizedName> {
    entries
      .iter()
      .map(|(tag, name)| LocalizedName {
        language: lang(tag),
        name: name.to_string(),
      })
      .collect()
  }

  fn flavor(entries: &[(&str, &str)]) -> Vec<FlavorTextEntry> {
    entries
      .iter()
      .map(|(tag, text)| FlavorTextEntry {
        flavor_text: text.to_string(),
        language: lang(tag),
      })
      .collect()
  }

  fn all_names() -> Vec<LocalizedName> {
    names(&[
      ("en", "Pikachu"),
      ("fr", "Pikachu (FR)"),
      ("es", "Pikachu (ES)"),
      ("de", "Pikachu (DE)"),
      ("ja", "ピカチュウ"),
    ])
  }

  #[test]
  fn test_each_supported_language() {
    let names = all_names();
    assert_eq!(localized_name(&names, "en"), "Pikachu");
    assert_eq!(localized_name(&names, "fr"), "Pikachu (FR)");
    assert_eq!(localized_name(&names, "es"), "Pikachu (ES)");
    assert_eq!(localized_name(&names, "de"), "Pikachu (DE)");
    assert_eq!(localized_name(&names, "ja"), "ピカチュウ");
  }

  #[test]
  fn test_unsupported_tag_reads_as_english() {
    let names = all_names();
    assert_eq!(localized_name(&names, "zh"), "Pikachu");
    assert_eq!(localized_name(&names, "invalid-lang"), "Pikachu");
    assert_eq!(localized_name(&names, ""), "Pikachu");
    // Tags are matched exactly
    assert_eq!(localized_name(&names, "FR"), "Pikachu");
  }

  #[test]
  fn test_missing_language_falls_back_to_english() {
    let names = names(&[
      ("en", "Pikachu"),
      ("fr", "Pikachu (FR)"),
      ("ja", "ピカチュウ"),
    ]);
    assert_eq!(localized_name(&names, "de"), "Pikachu");
    assert_eq!(localized_name(&names, "ja"), "ピカチュウ");
    assert_eq!(localized_name(&names, "zzz"), "Pikachu");
  }

  #[test]
  fn test_no_english_fallback_is_empty() {
    let names = names(&[("fr", "Pikachu (FR)")]);
    assert_eq!(localized_name(&names, "es"), "");
  }

  #[test]
  fn test_empty_collection_is_empty() {
    for language in ["en", "fr", "ja", "xx"] {
      assert_eq!(localized_name(&[], language), "");
      assert_eq!(localized_flavor_text(&[], language), "");
    }
  }

  #[test]
  fn test_empty_entry_falls_back_to_english() {
    let names = names(&[("en", "Pikachu"), ("fr", "")]);
    assert_eq!(localized_name(&names, "fr"), "Pikachu");

    let texts = flavor(&[("en", ""), ("de", "")]);
    assert_eq!(localized_flavor_text(&texts, "de"), "");
  }

  #[test]
  fn test_first_duplicate_wins() {
    let names = names(&[("en", "First"), ("en", "Second")]);
    assert_eq!(localized_name(&names, "en"), "First");
  }

  #[test]
  fn test_flavor_text_policy() {
    let texts = flavor(&[
      ("en", "Electric mouse Pokemon"),
      ("fr", "Pokemon souris électrique"),
      ("es", "Pokémon ratón eléctrico"),
      ("de", "Elektro-Maus-Pokemon"),
      ("ja", "でんきねずみポケモン"),
    ]);
    assert_eq!(localized_flavor_text(&texts, "fr"), "Pokemon souris électrique");
    assert_eq!(localized_flavor_text(&texts, "ja"), "でんきねずみポケモン");
    assert_eq!(localized_flavor_text(&texts, "zh"), "Electric mouse Pokemon");

    let french_only = flavor(&[("fr", "Pokemon souris électrique")]);
    assert_eq!(localized_flavor_text(&french_only, "es"), "");
  }

  #[test]
  fn test_language_resolve() {
    assert_eq!(Language::resolve("ja"), Language::Ja);
    assert_eq!(Language::resolve("klingon"), Language::En);
    assert_eq!(Language::from_tag("klingon"), None);
    assert_eq!(Language::De.to_string(), "de");
  }

  #[test]
  fn test_move_display_name() {
    let mut mv = Move {
      id: 98,
      name: "quick-attack".to_string(),
      names: names(&[("en", "Quick Attack"), ("fr", "Vive-Attaque")]),
      power: Some(40),
      pp: Some(30),
      accuracy: Some(100),
      move_type: lang("normal"),
      damage_class: None,
    };
    assert_eq!(move_display_name(&mv, "fr"), "Vive-Attaque");

    mv.names.clear();
    mv.name = "double-edge-move".to_string();
    assert_eq!(move_display_name(&mv, "fr"), "double edge-move");
  }
}
