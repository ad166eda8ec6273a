//! Single-slot cache with TTL (Time To Live) support.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// A thread-safe single-value cache with time-based expiration.
///
/// Holds the most recently stored value until the configured TTL elapses;
/// expired values are ignored by `get()`. Cloning is cheap (uses Arc
/// internally), so the cache can be shared across callers.
#[derive(Clone)]
pub struct TimedCache<V>
where
    V: Clone,
{
    slot: Arc<RwLock<Option<CacheEntry<V>>>>,
    ttl: Duration,
}

impl<V> TimedCache<V>
where
    V: Clone,
{
    /// Create a new TimedCache with the specified TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Store a value, replacing whatever was cached before.
    pub fn store(&self, value: V) {
        let entry = CacheEntry {
            value,
            inserted_at: Instant::now(),
        };

        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(entry);
        }
    }

    /// Get the cached value if present and not expired.
    pub fn get(&self) -> Option<V> {
        let now = Instant::now();

        if let Ok(slot) = self.slot.read() {
            if let Some(entry) = slot.as_ref() {
                if now.duration_since(entry.inserted_at) < self.ttl {
                    return Some(entry.value.clone());
                }
            }
        }

        None
    }

    /// Drop the cached value, forcing the next `get()` to miss.
    pub fn invalidate(&self) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_store_and_get() {
        let cache = TimedCache::new(Duration::from_secs(60));
        assert_eq!(cache.get(), None::<String>);

        cache.store("hello".to_string());
        assert_eq!(cache.get(), Some("hello".to_string()));
    }

    #[test]
    fn test_store_replaces_previous_value() {
        let cache = TimedCache::new(Duration::from_secs(60));
        cache.store(1u32);
        cache.store(2u32);
        assert_eq!(cache.get(), Some(2));
    }

    #[test]
    fn test_expired_value_is_ignored() {
        let cache = TimedCache::new(Duration::from_millis(20));
        cache.store("stale".to_string());

        thread::sleep(Duration::from_millis(40));
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_invalidate() {
        let cache = TimedCache::new(Duration::from_secs(60));
        cache.store(7u32);
        cache.invalidate();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let cache = TimedCache::new(Duration::from_secs(60));
        let clone = cache.clone();

        cache.store("shared".to_string());
        assert_eq!(clone.get(), Some("shared".to_string()));
    }
}
