//! Topology result cache
//!
//! Passive in-memory key/value store with time-based expiry. Expired
//! entries are purged lazily on read; there is no background eviction.
//! The store itself is single-owner — wrap it in a mutex when shared
//! across threads.

use crate::config::DEFAULT_CACHE_TTL_MS;
use std::collections::HashMap;

/// Millisecond wall-clock source, injectable for deterministic tests
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// Production clock backed by the system time
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }
}

struct CacheEntry<T> {
    data: T,
    stored_at_ms: u64,
}

/// Key-addressed store for computed analysis bundles
pub struct TopologyCache<T> {
    entries: HashMap<String, CacheEntry<T>>,
    ttl_ms: u64,
    clock: Box<dyn Clock>,
}

impl<T> TopologyCache<T> {
    /// Cache with the default 5 minute TTL
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_CACHE_TTL_MS)
    }

    pub fn with_ttl(ttl_ms: u64) -> Self {
        Self::with_clock(ttl_ms, Box::new(SystemClock))
    }

    /// Cache with an explicit clock; used by tests to simulate elapsed time
    pub fn with_clock(ttl_ms: u64, clock: Box<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl_ms,
            clock,
        }
    }

    /// Store `data` under `key`, overwriting any previous entry
    pub fn set(&mut self, key: impl Into<String>, data: T) {
        let stored_at_ms = self.clock.now_ms();
        self.entries.insert(key.into(), CacheEntry { data, stored_at_ms });
    }

    /// Fetch a live entry. An expired entry is removed and reported as a
    /// miss; an entry is live while `now - stored_at < ttl`.
    pub fn get(&mut self, key: &str) -> Option<&T> {
        let now = self.clock.now_ms();
        let expired = match self.entries.get(key) {
            Some(entry) => now.saturating_sub(entry.stored_at_ms) >= self.ttl_ms,
            None => return None,
        };
        if expired {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|entry| &entry.data)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, counting expired ones not yet purged
    pub fn size(&self) -> usize {
        self.entries.len()
    }
}

impl<T> Default for TopologyCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
