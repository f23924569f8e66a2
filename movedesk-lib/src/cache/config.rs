//! Cache configuration

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use super::DEFAULT_MAX_ENTRIES;

/// Configuration for the entity cache.
///
/// Controls how long contacts stay cached and how many are kept.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use movedesk_lib::cache::CacheConfig;
///
/// let config = CacheConfig::default()
///     .with_contact_ttl(Duration::from_secs(60))
///     .with_max_entries(100);
/// assert_eq!(config.max_entries, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// TTL for contacts resolved while normalizing quotes.
    ///
    /// Default: 5 minutes
    #[serde(with = "duration_secs")]
    pub contact_ttl: Duration,

    /// Maximum number of cached entities before eviction.
    ///
    /// Default: 1024
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            contact_ttl: Duration::from_secs(300), // 5 minutes
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl CacheConfig {
    /// Creates a new cache config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the contact TTL.
    pub fn with_contact_ttl(mut self, ttl: Duration) -> Self {
        self.contact_ttl = ttl;
        self
    }

    /// Sets the capacity limit.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Creates a config with no caching (zero TTL).
    pub fn no_cache() -> Self {
        Self {
            contact_ttl: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// TTLs are written as whole seconds in config files.
mod duration_secs {
    use std::time::Duration;

    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
