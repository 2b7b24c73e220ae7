//! URL-keyed response storage with read-time expiry.

use chrono::Duration;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::trace;

use super::traits::{CacheEntry, Clock, SystemClock};

/// How long a stored response stays valid unless configured otherwise.
pub const DEFAULT_TTL_MINUTES: i64 = 30;

/// Time-bound memoization of API responses, keyed by request URL.
///
/// Entries are only evicted when a read finds them expired or on [`clear`].
/// There is no capacity bound: the key space is the set of API endpoints
/// a client actually visits.
///
/// [`clear`]: ResponseCache::clear
pub struct ResponseCache {
  entries: Mutex<HashMap<String, CacheEntry>>,
  ttl: Duration,
  clock: Arc<dyn Clock>,
}

impl ResponseCache {
  /// Create an empty cache with the given time-to-live.
  pub fn new(ttl: Duration) -> Self {
    Self {
      entries: Mutex::new(HashMap::new()),
      ttl,
      clock: Arc::new(SystemClock),
    }
  }

  /// Replace the clock used to timestamp and expire entries.
  pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
    self.clock = clock;
    self
  }

  pub fn ttl(&self) -> Duration {
    self.ttl
  }

  /// Store `data` under `key`, replacing any previous entry.
  pub fn set(&self, key: &str, data: Value) {
    let entry = CacheEntry {
      data,
      stored_at: self.clock.now(),
    };
    self.entries().insert(key.to_string(), entry);
  }

  /// Look up `key`.
  ///
  /// Returns `None` when the key is unknown or its entry is older than the
  /// TTL; an expired entry is removed as part of the lookup.
  pub fn get(&self, key: &str) -> Option<Value> {
    let now = self.clock.now();
    let mut entries = self.entries();

    let expired = match entries.get(key) {
      Some(entry) => now - entry.stored_at > self.ttl,
      None => return None,
    };

    if expired {
      trace!(key, "evicting expired cache entry");
      entries.remove(key);
      return None;
    }

    entries.get(key).map(|entry| entry.data.clone())
  }

  /// Drop every entry.
  pub fn clear(&self) {
    self.entries().clear();
  }

  /// Number of stored entries, expired ones included until they are read.
  pub fn len(&self) -> usize {
    self.entries().len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries().is_empty()
  }

  fn entries(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
    // A panic while holding the lock cannot leave a HashMap half-written.
    self
      .entries
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
  }
}

impl Default for ResponseCache {
  fn default() -> Self {
    Self::new(Duration::minutes(DEFAULT_TTL_MINUTES))
  }
}

impl std::fmt::Debug for ResponseCache {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ResponseCache")
      .field("entries", &self.len())
      .field("ttl", &self.ttl)
      .finish_non_exhaustive()
  }
}
