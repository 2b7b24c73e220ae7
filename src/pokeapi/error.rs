use thiserror::Error;

/// Failure while fetching or decoding a PokéAPI resource.
#[derive(Debug, Error)]
pub enum RemoteError {
  /// The server answered with a non-success status
  #[error("HTTP error! status: {status} ({url})")]
  Status { url: String, status: u16 },

  /// The request never produced a response (DNS, connect, timeout, reset)
  #[error("request to {url} failed: {message}")]
  Transport { url: String, message: String },

  /// The body was not JSON, or not the JSON shape we expected
  #[error("failed to decode response from {url}: {message}")]
  Decode { url: String, message: String },
}

impl RemoteError {
  /// URL of the request that failed.
  pub fn url(&self) -> &str {
    match self {
      Self::Status { url, .. } | Self::Transport { url, .. } | Self::Decode { url, .. } => url,
    }
  }

  /// HTTP status code, when the server answered.
  pub fn status(&self) -> Option<u16> {
    match self {
      Self::Status { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// True when the upstream API reported the resource as missing.
  pub fn is_not_found(&self) -> bool {
    self.status() == Some(404)
  }
}
