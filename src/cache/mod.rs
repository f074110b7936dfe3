//! Cache Module
//!
//! Provides an in-memory entity cache with sliding TTL expiration.

mod clock;
mod entry;
mod expiry;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use expiry::{is_expired, DEFAULT_TTL};
pub use stats::CacheStats;
pub use store::CacheStore;

/// Surrogate key of a cached entity.
pub type EntityId = i64;

/// Cache store shared between request handlers and the sweeper.
pub type SharedCache<V> = Arc<RwLock<CacheStore<V>>>;
