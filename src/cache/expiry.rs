//! Expiry policy: sliding TTL measured from the last access.

use std::time::Duration;

use super::CacheEntry;

/// Default idle time-to-live for cached entities.
pub const DEFAULT_TTL: Duration = Duration::from_millis(20_000);

/// Returns true once the entry has been idle for strictly longer than `ttl`.
///
/// An entry idle for exactly `ttl` is still live.
pub fn is_expired<V>(entry: &CacheEntry<V>, now: u64, ttl: Duration) -> bool {
    u128::from(entry.idle_ms(now)) > ttl.as_millis()
}
