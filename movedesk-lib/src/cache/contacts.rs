//! Contact cache used to resolve contact references

use std::time::Duration;

use super::CacheConfig;
use super::CachedValue;
use super::EntityCache;
use super::InMemoryCache;
use crate::model::types::Contact;

/// A cache of contacts keyed by contact id.
///
/// Quotes sometimes reference their customer by id instead of embedding it.
/// Hosts keep one `ContactCache` per session, seed it from the customers they
/// load, and hand it to [`normalize_quote`](crate::model::normalize_quote).
#[derive(Debug)]
pub struct ContactCache {
    store: InMemoryCache<Contact>,
    ttl: Duration,
}

impl ContactCache {
    /// Creates a contact cache from configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            store: InMemoryCache::with_max_entries(config.max_entries),
            ttl: config.contact_ttl,
        }
    }

    /// Looks up a live contact by id.
    pub fn resolve(&self, id: &str) -> Option<Contact> {
        self.store.get(id).map(|cached| cached.value)
    }

    /// Stores or refreshes a contact.
    pub fn remember(&self, contact: &Contact) {
        if self.ttl.is_zero() {
            return;
        }
        self.store
            .set(&contact.id, CachedValue::with_ttl(contact.clone(), self.ttl));
    }

    /// Stores or refreshes many contacts.
    pub fn remember_all<'a>(&self, contacts: impl IntoIterator<Item = &'a Contact>) {
        for contact in contacts {
            self.remember(contact);
        }
    }

    /// Drops a contact, forcing the next resolve to miss.
    pub fn invalidate(&self, id: &str) {
        self.store.remove(id);
    }

    /// Removes expired contacts.
    pub fn gc(&self) -> usize {
        self.store.gc()
    }

    /// Returns the number of cached contacts.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no contacts are cached.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for ContactCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remember_and_resolve() {
        let cache = ContactCache::default();
        let contact = Contact::new("c1", "Ann", "a@x.com", "555");
        cache.remember(&contact);
        assert_eq!(cache.resolve("c1"), Some(contact));
        assert_eq!(cache.resolve("c2"), None);
    }

    #[test]
    fn test_invalidate() {
        let cache = ContactCache::default();
        cache.remember(&Contact::new("c1", "Ann", "", ""));
        cache.invalidate("c1");
        assert!(cache.resolve("c1").is_none());
    }

    #[test]
    fn test_no_cache_config_stores_nothing() {
        let cache = ContactCache::new(&CacheConfig::no_cache());
        cache.remember(&Contact::new("c1", "Ann", "", ""));
        assert!(cache.is_empty());
    }
}
