//! Cache Entry Module
//!
//! Defines the record kept for each cached entity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// == Cache Entry ==
/// An owned snapshot of an entity plus its recency metadata.
///
/// The entity is never handed out by reference past the store's lock, so
/// later mutations by the caller cannot leak into the cache. The access
/// time is atomic so hits can be recorded under a shared lock.
pub struct CacheEntry<V> {
    entity: V,
    /// Insertion or last refresh time (Unix milliseconds)
    inserted_at: u64,
    /// Last successful read or write (Unix milliseconds)
    last_accessed: AtomicU64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped at `now`.
    pub fn new(entity: V, now: u64) -> Self {
        Self {
            entity,
            inserted_at: now,
            last_accessed: AtomicU64::new(now),
        }
    }

    pub fn entity(&self) -> &V {
        &self.entity
    }

    pub fn inserted_at(&self) -> u64 {
        self.inserted_at
    }

    pub fn last_accessed(&self) -> u64 {
        self.last_accessed.load(Ordering::Acquire)
    }

    /// Milliseconds since the last access, zero if `now` lags behind it.
    pub fn idle_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.last_accessed())
    }

    // == Touch ==
    /// Records a read at `now`. Never moves the timestamp backwards.
    pub(crate) fn touch(&self, now: u64) {
        self.last_accessed.fetch_max(now, Ordering::AcqRel);
    }
}

impl<V: Clone> Clone for CacheEntry<V> {
    fn clone(&self) -> Self {
        Self {
            entity: self.entity.clone(),
            inserted_at: self.inserted_at,
            last_accessed: AtomicU64::new(self.last_accessed()),
        }
    }
}

impl<V: PartialEq> PartialEq for CacheEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entity == other.entity
            && self.inserted_at == other.inserted_at
            && self.last_accessed() == other.last_accessed()
    }
}

impl<V: fmt::Debug> fmt::Debug for CacheEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("entity", &self.entity)
            .field("inserted_at", &self.inserted_at)
            .field("last_accessed", &self.last_accessed())
            .finish()
    }
}
