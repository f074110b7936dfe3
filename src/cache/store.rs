//! Cache Store Module
//!
//! Keyed container of cache entries with sliding TTL expiration.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

use crate::cache::stats::StatsCounters;
use crate::cache::{is_expired, CacheEntry, CacheStats, Clock, EntityId, SystemClock};

// == Cache Store ==
/// In-memory entity cache.
///
/// Holds at most one entry per key. Not synchronized on its own; share it
/// as a [`SharedCache`](crate::cache::SharedCache) so every access goes
/// through the lock. Lookups only need the read side.
#[derive(Debug)]
pub struct CacheStore<V> {
    entries: HashMap<EntityId, CacheEntry<V>>,
    /// Stamp of the last put or remove per key. Outlives the entry.
    generations: HashMap<EntityId, u64>,
    last_generation: u64,
    stats: StatsCounters,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store reading wall-clock time.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates an empty store driven by the given clock.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            generations: HashMap::new(),
            last_generation: 0,
            stats: StatsCounters::default(),
            ttl,
            clock,
        }
    }

    // == Get ==
    /// Returns the live entry for `key` and marks it as just accessed.
    ///
    /// An entry idle past the TTL reads as a miss. It stays in place until
    /// the next sweep or until [`fill`](Self::fill) replaces it.
    pub fn get(&self, key: EntityId) -> Option<&CacheEntry<V>> {
        let now = self.clock.now_ms();

        match self.entries.get(&key) {
            Some(entry) if !is_expired(entry, now, self.ttl) => {
                entry.touch(now);
                self.stats.record_hit();
                Some(entry)
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Generation ==
    /// Write stamp for `key`. Changes on every `put` or `remove` of it,
    /// zero if neither ever happened.
    pub fn generation(&self, key: EntityId) -> u64 {
        self.generations.get(&key).copied().unwrap_or(0)
    }

    fn bump_generation(&mut self, key: EntityId) {
        self.last_generation += 1;
        self.generations.insert(key, self.last_generation);
    }

    // == Put ==
    /// Inserts or overwrites the entry for `key`, stamped now.
    pub fn put(&mut self, key: EntityId, entity: V) {
        self.bump_generation(key);
        let entry = CacheEntry::new(entity, self.clock.now_ms());
        self.entries.insert(key, entry);
    }

    // == Fill ==
    /// Caches a copy loaded from the backing store after a miss.
    ///
    /// `seen` is the key's [`generation`](Self::generation) read before the
    /// load. The copy is dropped if a put or remove happened since, or if a
    /// live entry is already present. An expired entry is replaced. Returns
    /// whether it inserted.
    pub fn fill(&mut self, key: EntityId, entity: V, seen: u64) -> bool {
        if self.generation(key) != seen {
            return false;
        }

        let now = self.clock.now_ms();
        if let Some(existing) = self.entries.get(&key) {
            if !is_expired(existing, now, self.ttl) {
                return false;
            }
            self.stats.record_expirations(1);
        }

        self.entries.insert(key, CacheEntry::new(entity, now));
        true
    }

    // == Remove ==
    /// Drops the entry for `key`. Returns whether one was present.
    ///
    /// Bumps the generation even when nothing was cached, so pending fills
    /// for `key` are refused.
    pub fn remove(&mut self, key: EntityId) -> bool {
        self.bump_generation(key);
        let removed = self.entries.remove(&key).is_some();
        if removed {
            self.stats.record_invalidation();
        }
        removed
    }

    // == Sweep ==
    /// Removes every entry idle for longer than `ttl` at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self, now: u64, ttl: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !is_expired(entry, now, ttl));
        let removed = before - self.entries.len();
        self.stats.record_expirations(removed);
        removed
    }

    /// Sweeps against the store's own clock and TTL.
    pub fn sweep_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        self.sweep(now, self.ttl)
    }

    // == Snapshot ==
    /// Read-only copy of the current contents, ordered by key.
    ///
    /// Does not refresh recency.
    pub fn snapshot(&self) -> BTreeMap<EntityId, CacheEntry<V>> {
        self.entries
            .iter()
            .map(|(key, entry)| (*key, entry.clone()))
            .collect()
    }

    pub fn contains(&self, key: EntityId) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
