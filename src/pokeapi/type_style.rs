//! Display color and badge image per elemental type.

const FALLBACK_COLOR: &str = "#68A090";

/// Hex color used for a type badge; unknown types get a neutral teal.
pub fn type_color(type_name: &str) -> &'static str {
  match type_name {
    "normal" => "#A8A878",
    "fire" => "#F08030",
    "water" => "#6890F0",
    "electric" => "#F8D030",
    "grass" => "#78C850",
    "ice" => "#98D8D8",
    "fighting" => "#C03028",
    "poison" => "#A040A0",
    "ground" => "#E0C068",
    "flying" => "#A890F0",
    "psychic" => "#F85888",
    "bug" => "#A8B820",
    "rock" => "#B8A038",
    "ghost" => "#705898",
    "dragon" => "#7038F8",
    "dark" => "#705848",
    "steel" => "#B8B8D0",
    "fairy" => "#EE99AC",
    _ => FALLBACK_COLOR,
  }
}

fn type_image_file(type_name: &str) -> Option<&'static str> {
  let file = match type_name {
    "normal" => "Type_Normal.png",
    "fire" => "Type_Feu.png",
    "water" => "Type_Eau.png",
    "electric" => "Type_Electrique.png",
    "grass" => "Type_Plante.png",
    "ice" => "Type_Glace.png",
    "fighting" => "Type_Combat.png",
    "poison" => "Type_Poison.png",
    "ground" => "Type_Sol.png",
    "flying" => "Type_Vol.png",
    "psychic" => "Type_Psy.png",
    "bug" => "Type_Insect.png",
    "rock" => "Type_Roche.png",
    "ghost" => "Type_Spectre.png",
    "dragon" => "Type_Dragon.png",
    "dark" => "Type_Tenebre.png",
    "steel" => "Type_Acier.png",
    "fairy" => "Type_Fee.png",
    _ => return None,
  };
  Some(file)
}

/// Site-relative path of the type badge image, or `""` for unknown types.
pub fn type_image_path(type_name: &str) -> String {
  type_image_file(&type_name.to_lowercase())
    .map(|file| format!("/images/types/{}", file))
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_known_type_color() {
    assert_eq!(type_color("electric"), "#F8D030");
  }

  #[test]
  fn test_unknown_type_color_falls_back() {
    assert_eq!(type_color("shadow"), "#68A090");
    // Color lookup is exact
    assert_eq!(type_color("Fire"), "#68A090");
  }

  #[test]
  fn test_type_image_is_case_insensitive() {
    assert_eq!(type_image_path("Fire"), "/images/types/Type_Feu.png");
    assert_eq!(type_image_path("dark"), "/images/types/Type_Tenebre.png");
  }

  #[test]
  fn test_unknown_type_image_is_empty() {
    assert_eq!(type_image_path("stellar"), "");
  }
}
