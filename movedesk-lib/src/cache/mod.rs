//! Explicit entity caching
//!
//! Provides an `EntityCache` trait and an in-memory implementation with TTL
//! expiry and capacity eviction. Hosts own a cache instance and pass it to the
//! loaders that need it; nothing here is global.

mod config;
mod contacts;
mod memory;

pub use config::*;
pub use contacts::*;
pub use memory::*;

use std::time::Duration;

use chrono::DateTime;
use chrono::Utc;

/// An entry of an [`EntityCache`] together with its lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedValue<T> {
    pub value: T,
    pub created_at: DateTime<Utc>,
    /// First instant at which the entry is stale.
    pub expires_at: DateTime<Utc>,
}

impl<T> CachedValue<T> {
    pub fn new(value: T, created_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value,
            created_at,
            expires_at,
        }
    }

    /// An entry created now that goes stale after `ttl`.
    ///
    /// A TTL too large for chrono expires immediately.
    pub fn with_ttl(value: T, ttl: Duration) -> Self {
        let created_at = Utc::now();
        let lifetime = chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::zero());
        Self::new(value, created_at, created_at + lifetime)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Keyed store of entities with expiry.
///
/// `get` never hands out a stale entry. `gc` sweeps stale entries and
/// reports how many it dropped.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use movedesk_lib::cache::{CachedValue, EntityCache, InMemoryCache};
///
/// let cache = InMemoryCache::new();
/// cache.set("c1", CachedValue::with_ttl("Ann".to_string(), Duration::from_secs(60)));
///
/// assert_eq!(cache.get("c1").map(|c| c.value), Some("Ann".to_string()));
/// ```
pub trait EntityCache<T>: Send + Sync {
    fn get(&self, key: &str) -> Option<CachedValue<T>>;

    fn set(&self, key: &str, value: CachedValue<T>);

    fn remove(&self, key: &str);

    fn clear(&self);

    /// Drops stale entries, returning how many were dropped.
    fn gc(&self) -> usize;
}
