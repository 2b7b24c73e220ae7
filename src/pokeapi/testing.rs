//! In-memory transport for tests.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::client::PokeApiClient;
use super::error::RemoteError;
use super::transport::Transport;
use crate::cache::ResponseCache;
use crate::config::DEFAULT_BASE_URL;

/// Canned responses by exact URL. Unknown URLs fail as a transport error.
#[derive(Default)]
pub struct StubTransport {
  responses: HashMap<String, Result<Value, u16>>,
  calls: Mutex<Vec<String>>,
}

impl StubTransport {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_json(mut self, url: &str, body: Value) -> Self {
    self.responses.insert(url.to_string(), Ok(body));
    self
  }

  pub fn with_status(mut self, url: &str, status: u16) -> Self {
    self.responses.insert(url.to_string(), Err(status));
    self
  }

  pub fn call_count(&self, url: &str) -> usize {
    self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
  }
}

#[async_trait]
impl Transport for StubTransport {
  async fn get_json(&self, url: &str) -> Result<Value, RemoteError> {
    self.calls.lock().unwrap().push(url.to_string());
    tokio::task::yield_now().await;

    match self.responses.get(url) {
      Some(Ok(body)) => Ok(body.clone()),
      Some(Err(status)) => Err(RemoteError::Status {
        url: url.to_string(),
        status: *status,
      }),
      None => Err(RemoteError::Transport {
        url: url.to_string(),
        message: "connection refused".to_string(),
      }),
    }
  }
}

pub fn stub_client(stub: StubTransport) -> PokeApiClient<StubTransport> {
  PokeApiClient::with_transport(stub, Arc::new(ResponseCache::default()), DEFAULT_BASE_URL)
    .unwrap()
}

/// `/pokemon` list payload for the given `(name, url)` pairs.
pub fn list_payload(entries: &[(&str, &str)]) -> Value {
  let results: Vec<Value> = entries
    .iter()
    .map(|(name, url)| json!({ "name": name, "url": url }))
    .collect();
  json!({
    "count": results.len(),
    "next": null,
    "previous": null,
    "results": results,
  })
}

/// `names`-style array from `(language, text)` pairs.
pub fn names_payload(entries: &[(&str, &str)]) -> Value {
  Value::Array(
    entries
      .iter()
      .map(|(lang, name)| json!({ "language": { "name": lang, "url": "" }, "name": name }))
      .collect(),
  )
}
