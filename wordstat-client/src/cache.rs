//! In-process response cache with per-entry TTL.
//!
//! Expiry is checked at read time: a `get` that observes an expired entry
//! removes it and reports a miss. There is no background sweep — an expired
//! entry occupies memory until the next read for that exact key, which is
//! acceptable for the low-cardinality key space this cache serves (today,
//! one key: the region tree).

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Cache key for the region-tree response.
pub const REGIONS_TREE_CACHE_KEY: &str = "regions_tree";

/// The region tree changes rarely; 24 hours between refetches.
pub const REGIONS_TREE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug)]
struct CacheEntry<T> {
    value: Arc<T>,
    expires_at: Instant,
}

/// String-keyed store with per-entry expiration and lazy expiry-on-read.
///
/// Values are handed out as shared [`Arc`]s, so a read copies nothing and
/// readers cannot mutate what other readers see. Safe for concurrent
/// `get`/`insert` from independent invocations. Unbounded: there is no
/// capacity limit or eviction beyond expiry.
#[derive(Debug)]
pub struct TtlCache<T> {
    entries: DashMap<String, CacheEntry<T>>,
}

impl<T> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TtlCache<T> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Get the value for `key` if present and not expired.
    ///
    /// An expired entry is removed as a side effect of the read that
    /// observes it.
    pub fn get(&self, key: &str) -> Option<Arc<T>> {
        let expired = match self.entries.get(key) {
            None => return None,
            Some(entry) => {
                if Instant::now() <= entry.expires_at {
                    return Some(Arc::clone(&entry.value));
                }
                true
            }
        };
        // Guard dropped above; removal must not hold a read lock on the shard.
        if expired {
            self.entries.remove(key);
        }
        None
    }

    /// Store `value` under `key`, overwriting any existing entry.
    pub fn insert(&self, key: impl Into<String>, value: T, ttl: Duration) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                value: Arc::new(value),
                expires_at: Instant::now() + ttl,
            },
        );
    }

    /// Whether `key` holds a fresh entry. Shares `get`'s lazy-expiry side effect.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, returning whether an entry (fresh or expired) was present.
    pub fn remove(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
