use color_eyre::{eyre::eyre, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cache::DEFAULT_TTL_MINUTES;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Display language tag (en, fr, es, de, ja); anything else means en
  pub language: String,
  pub api: ApiConfig,
  pub cache: CacheConfig,
  pub moves: MovesConfig,
  pub log: LogConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      language: "en".to_string(),
      api: ApiConfig::default(),
      cache: CacheConfig::default(),
      moves: MovesConfig::default(),
      log: LogConfig::default(),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
  pub base_url: String,
  /// Per-request timeout
  pub timeout_secs: u64,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      timeout_secs: 10,
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
  /// How long a fetched response is reused
  pub ttl_minutes: i64,
}

impl CacheConfig {
  /// TTL as a duration; fails for negative or out-of-range values.
  pub fn ttl(&self) -> Result<chrono::Duration> {
    if self.ttl_minutes < 0 {
      return Err(eyre!("cache.ttl_minutes must not be negative"));
    }
    chrono::Duration::try_minutes(self.ttl_minutes)
      .ok_or_else(|| eyre!("cache.ttl_minutes out of range: {}", self.ttl_minutes))
  }
}

impl Default for CacheConfig {
  fn default() -> Self {
    Self {
      ttl_minutes: DEFAULT_TTL_MINUTES,
    }
  }
}

/// Call-site throttling for move lookups on the detail view
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovesConfig {
  pub limit: usize,
  pub batch_size: usize,
  pub batch_delay_ms: u64,
}

impl Default for MovesConfig {
  fn default() -> Self {
    Self {
      limit: 20,
      batch_size: 5,
      batch_delay_ms: 200,
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
  /// EnvFilter directive used when RUST_LOG is unset
  pub filter: String,
  /// Write logs here instead of stderr
  pub file: Option<PathBuf>,
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      filter: "warn".to_string(),
      file: None,
    }
  }
}

impl Config {
  /// Load configuration from file.
  ///
  /// Search order:
  /// 1. Explicit path if provided
  /// 2. ./pokedex.yaml (current directory)
  /// 3. $XDG_CONFIG_HOME/pokedex/config.yaml
  ///
  /// Falls back to defaults when no file is found.
  pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
    let path = if let Some(p) = explicit_path {
      if p.exists() {
        Some(p.to_path_buf())
      } else {
        return Err(eyre!("Config file not found: {}", p.display()));
      }
    } else {
      Self::find_config_file()
    };

    let config = match path {
      Some(p) => Self::load_from_path(&p)?,
      None => Self::default(),
    };
    config.validate()?;

    Ok(config)
  }

  fn find_config_file() -> Option<PathBuf> {
    // Check current directory
    let local = PathBuf::from("pokedex.yaml");
    if local.exists() {
      return Some(local);
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
      let xdg_path = config_dir.join("pokedex").join("config.yaml");
      if xdg_path.exists() {
        return Some(xdg_path);
      }
    }

    None
  }

  fn load_from_path(path: &Path) -> Result<Self> {
    let contents = std::fs::read_to_string(path)
      .map_err(|e| eyre!("Failed to read config file {}: {}", path.display(), e))?;

    Self::from_yaml(&contents)
      .map_err(|e| eyre!("Failed to parse config file {}: {}", path.display(), e))
  }

  fn from_yaml(contents: &str) -> Result<Self> {
    // An empty file is a valid, all-defaults config
    if contents.trim().is_empty() {
      return Ok(Self::default());
    }
    Ok(serde_yaml::from_str(contents)?)
  }

  fn validate(&self) -> Result<()> {
    let base = url::Url::parse(&self.api.base_url)
      .map_err(|e| eyre!("Invalid api.base_url '{}': {}", self.api.base_url, e))?;
    if base.cannot_be_a_base() {
      return Err(eyre!("Invalid api.base_url '{}'", self.api.base_url));
    }
    self.cache.ttl()?;
    if self.moves.batch_size == 0 {
      return Err(eyre!("moves.batch_size must be at least 1"));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.language, "en");
    assert_eq!(config.api.base_url, "https://pokeapi.co/api/v2");
    assert_eq!(config.cache.ttl_minutes, 30);
    assert_eq!(config.moves.limit, 20);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_partial_yaml_keeps_defaults() {
    let config = Config::from_yaml("language: ja\ncache:\n  ttl_minutes: 5\n").unwrap();
    assert_eq!(config.language, "ja");
    assert_eq!(config.cache.ttl_minutes, 5);
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.moves.batch_size, 5);
  }

  #[test]
  fn test_empty_yaml_is_default() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.language, "en");
  }

  #[test]
  fn test_invalid_base_url_rejected() {
    let mut config = Config::default();
    config.api.base_url = "not a url".to_string();
    assert!(config.validate().is_err());
  }

  #[test]
  fn test_negative_ttl_rejected() {
    let config = Config::from_yaml("cache:\n  ttl_minutes: -1\n").unwrap();
    assert!(config.validate().is_err());
  }

  #[test]
  fn test_huge_ttl_rejected() {
    let config = Config::from_yaml("cache:\n  ttl_minutes: 9223372036854775807\n").unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("out of range"));
    assert!(config.cache.ttl().is_err());
  }

  #[test]
  fn test_ttl_duration() {
    let config = Config::from_yaml("cache:\n  ttl_minutes: 5\n").unwrap();
    assert_eq!(config.cache.ttl().unwrap(), chrono::Duration::minutes(5));
  }

  #[test]
  fn test_missing_explicit_path_is_error() {
    let err = Config::load(Some(Path::new("/definitely/not/here.yaml"))).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
  }
}
