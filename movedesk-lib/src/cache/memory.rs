//! DashMap-backed entity cache

use dashmap::DashMap;

use super::CachedValue;
use super::EntityCache;

/// Default number of entries kept before the oldest entry is evicted.
pub const DEFAULT_MAX_ENTRIES: usize = 1024;

/// Entity cache held in a `DashMap`, shareable across threads.
///
/// Entries expire after their TTL. When the cache is full, inserting a new key
/// evicts the entry with the oldest `created_at`.
///
/// # Example
///
/// ```
/// use movedesk_lib::cache::InMemoryCache;
///
/// let cache: InMemoryCache<String> = InMemoryCache::with_max_entries(16);
/// assert!(cache.is_empty());
/// ```
#[derive(Debug)]
pub struct InMemoryCache<T> {
    store: DashMap<String, CachedValue<T>>,
    max_entries: usize,
}

impl<T> Default for InMemoryCache<T> {
    fn default() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }
}

impl<T> InMemoryCache<T> {
    /// An empty cache holding up to [`DEFAULT_MAX_ENTRIES`] entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory cache holding at most `max_entries` values.
    ///
    /// A limit of zero is treated as one.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            store: DashMap::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Returns the number of entries in the cache (including expired ones).
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the capacity limit.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    fn evict_oldest(&self) {
        let oldest = self
            .store
            .iter()
            .min_by_key(|entry| entry.value().created_at)
            .map(|entry| entry.key().clone());
        if let Some(key) = oldest {
            log::debug!("Evicting cache entry '{}'", key);
            self.store.remove(&key);
        }
    }
}

impl<T: Clone + Send + Sync> EntityCache<T> for InMemoryCache<T> {
    fn get(&self, key: &str) -> Option<CachedValue<T>> {
        let entry = self.store.get(key)?;
        let value = entry.value();

        if value.is_expired() {
            drop(entry);
            self.store.remove(key);
            None
        } else {
            Some(value.clone())
        }
    }

    fn set(&self, key: &str, value: CachedValue<T>) {
        if !self.store.contains_key(key) && self.store.len() >= self.max_entries {
            // Expired entries go first, then the oldest live one
            if self.gc() == 0 {
                self.evict_oldest();
            }
        }
        self.store.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.store.remove(key);
    }

    fn clear(&self) {
        self.store.clear();
    }

    fn gc(&self) -> usize {
        let mut removed = 0;
        self.store.retain(|_, value| {
            if value.is_expired() {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }
}
