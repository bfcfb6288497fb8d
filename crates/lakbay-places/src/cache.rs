//! Time-bounded cache of normalized search responses.
//!
//! Keyed by the exact (origin, keyword, radius) tuple. Only successful
//! lookups are stored — including empty `ZERO_RESULTS` lists — so a cached
//! empty list is indistinguishable from a fresh one, and failures always
//! hit the provider again. Under concurrent misses for the same key the
//! last writer wins; correctness does not depend on a single in-flight
//! call per key.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use lakbay_core::{PlaceQuery, PlaceRecord};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    // f64 coordinates hashed by bit pattern so identical origins compare
    // equal without a float Eq impl.
    lat_bits: u64,
    lng_bits: u64,
    keyword: String,
    radius_m: u32,
}

impl CacheKey {
    fn from_query(query: &PlaceQuery) -> Self {
        Self {
            lat_bits: query.origin.lat.to_bits(),
            lng_bits: query.origin.lng.to_bits(),
            keyword: query.keyword.clone(),
            radius_m: query.radius_m,
        }
    }
}

struct CacheEntry {
    stored_at: Instant,
    records: Vec<PlaceRecord>,
}

/// Get-or-store cache with a fixed TTL.
pub struct ResponseCache {
    ttl: Duration,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl ResponseCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached records for `query` if present and not expired.
    #[must_use]
    pub fn get(&self, query: &PlaceQuery) -> Option<Vec<PlaceRecord>> {
        let key = CacheKey::from_query(query);
        let entries = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.records.clone())
    }

    /// Stores a successful lookup, replacing any previous entry for the
    /// same key and dropping entries that have aged out.
    pub fn store(&self, query: &PlaceQuery, records: Vec<PlaceRecord>) {
        let key = CacheKey::from_query(query);
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        entries.insert(
            key,
            CacheEntry {
                stored_at: Instant::now(),
                records,
            },
        );
    }
}
