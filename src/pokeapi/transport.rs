//! HTTP access to the PokéAPI.

use async_trait::async_trait;
use color_eyre::{eyre::eyre, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::error::RemoteError;
use crate::config::ApiConfig;

/// Performs a single GET and returns the parsed JSON body.
///
/// Implementations must report non-2xx answers as [`RemoteError::Status`]
/// and must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
  async fn get_json(&self, url: &str) -> Result<Value, RemoteError>;
}

/// Transport backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpTransport {
  client: reqwest::Client,
}

impl HttpTransport {
  pub fn new(config: &ApiConfig) -> Result<Self> {
    let client = reqwest::Client::builder()
      .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .map_err(|e| eyre!("Failed to create HTTP client: {}", e))?;

    Ok(Self { client })
  }
}

#[async_trait]
impl Transport for HttpTransport {
  async fn get_json(&self, url: &str) -> Result<Value, RemoteError> {
    debug!(url, "GET");

    let response = self
      .client
      .get(url)
      .send()
      .await
      .map_err(|e| RemoteError::Transport {
        url: url.to_string(),
        message: e.to_string(),
      })?;

    let status = response.status();
    if !status.is_success() {
      return Err(RemoteError::Status {
        url: url.to_string(),
        status: status.as_u16(),
      });
    }

    response.json::<Value>().await.map_err(|e| {
      if e.is_decode() {
        RemoteError::Decode {
          url: url.to_string(),
          message: e.to_string(),
        }
      } else {
        RemoteError::Transport {
          url: url.to_string(),
          message: e.to_string(),
        }
      }
    })
  }
}
