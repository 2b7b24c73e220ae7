//! In-memory response cache for API data.
//!
//! This module provides a process-local cache keyed by request URL that:
//! - Stores raw JSON payloads with the time they were stored
//! - Treats entries older than the TTL as absent and evicts them on read
//! - Takes its notion of "now" from an injectable [`Clock`]

mod storage;
mod traits;

pub use storage::{ResponseCache, DEFAULT_TTL_MINUTES};
pub use traits::{CacheEntry, Clock, SystemClock};

#[cfg(test)]
pub use traits::ManualClock;
