use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::{CacheConfig, CacheKey};

struct CacheEntry<V> {
    value: V,
    created_at: Instant,
    /// Insertion counter; breaks `created_at` ties during eviction.
    seq: u64,
}

struct CacheState<V> {
    entries: HashMap<CacheKey, CacheEntry<V>>,
    next_seq: u64,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<V> CacheState<V> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_seq: 0,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    fn sweep_expired(&mut self, now: Instant, ttl: Duration) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| is_fresh(entry.created_at, now, ttl));
        before - self.entries.len()
    }

    /// Remove the `count` oldest entries by insertion time.
    fn evict_oldest(&mut self, count: usize) {
        let mut by_age: Vec<(Instant, u64, CacheKey)> = self
            .entries
            .iter()
            .map(|(key, entry)| (entry.created_at, entry.seq, key.clone()))
            .collect();
        by_age.sort_unstable_by_key(|(created_at, seq, _)| (*created_at, *seq));

        for (_, _, key) in by_age.into_iter().take(count) {
            self.entries.remove(&key);
            self.evictions += 1;
        }
    }
}

fn is_fresh(created_at: Instant, now: Instant, ttl: Duration) -> bool {
    now.saturating_duration_since(created_at) < ttl
}

/// Point-in-time counters for one cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub max_entries: usize,
    pub ttl: Duration,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Bounded memo store with insertion-time expiry and oldest-first eviction.
///
/// Reads hand out clones, so a caller can never reach a cached value through
/// what it was given. The lock is never held while a value is computed.
pub struct ResultCache<V> {
    name: &'static str,
    config: CacheConfig,
    state: Mutex<CacheState<V>>,
}

impl<V: Clone> ResultCache<V> {
    #[must_use]
    pub fn new(name: &'static str, config: CacheConfig) -> Self {
        Self {
            name,
            config,
            state: Mutex::new(CacheState::new()),
        }
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_compute<F>(&self, key: &CacheKey, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self.try_get_or_compute(key, || Ok::<V, Infallible>(compute())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Like [`get_or_compute`](Self::get_or_compute) for fallible
    /// computations. Errors are returned as-is and never cached.
    pub fn try_get_or_compute<F, E>(&self, key: &CacheKey, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        self.try_get_or_compute_at(key, Instant::now(), compute)
    }

    fn try_get_or_compute_at<F, E>(&self, key: &CacheKey, now: Instant, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get_at(key, now) {
            return Ok(value);
        }

        let value = compute()?;
        self.insert_at(key.clone(), value.clone(), now);
        Ok(value)
    }

    /// Clone of the live value under `key`.
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    fn get_at(&self, key: &CacheKey, now: Instant) -> Option<V> {
        let ttl = self.config.ttl;
        let fresh = {
            let mut state = self.state.lock();
            let fresh = state
                .entries
                .get(key)
                .filter(|entry| is_fresh(entry.created_at, now, ttl))
                .map(|entry| entry.value.clone());

            if fresh.is_some() {
                state.hits += 1;
            } else {
                // Expired entries are dropped as soon as they are seen
                state.entries.remove(key);
                state.misses += 1;
            }
            fresh
        };

        if fresh.is_some() {
            debug!("[{}] cache hit {}", self.name, key);
        } else {
            debug!("[{}] cache miss {}", self.name, key);
        }
        fresh
    }

    /// Store `value` under `key`, replacing any previous entry.
    pub fn insert(&self, key: CacheKey, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    fn insert_at(&self, key: CacheKey, value: V, now: Instant) {
        if self.config.stores_nothing() {
            return;
        }
        let max_entries = self.config.max_entries;

        let mut state = self.state.lock();

        if !state.entries.contains_key(&key) {
            if state.entries.len() > self.config.sweep_threshold() {
                let swept = state.sweep_expired(now, self.config.ttl);
                if swept > 0 {
                    debug!("[{}] swept {} expired entries", self.name, swept);
                }
            }

            if state.entries.len() >= max_entries {
                let excess = state.entries.len() + 1 - max_entries;
                state.evict_oldest(excess);
                debug!("[{}] evicted {} oldest entries", self.name, excess);
            }
        }

        let seq = state.next_seq;
        state.next_seq += 1;
        state.entries.insert(
            key,
            CacheEntry {
                value,
                created_at: now,
                seq,
            },
        );
    }

    /// Drop every expired entry; returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    fn purge_expired_at(&self, now: Instant) -> usize {
        let purged = self.state.lock().sweep_expired(now, self.config.ttl);
        debug!("[{}] purged {} expired entries", self.name, purged);
        purged
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&self) {
        self.state.lock().entries.clear();
    }

    /// Number of stored entries, including expired ones not yet swept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        CacheStats {
            entries: state.entries.len(),
            max_entries: self.config.max_entries,
            ttl: self.config.ttl,
            hits: state.hits,
            misses: state.misses,
            evictions: state.evictions,
        }
    }
}
