//! Cache Store Module
//!
//! The unsynchronized map behind the response cache. Every method here is
//! called with the cache's guard held; see `ResponseCache` for the shared handle.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage for raw payloads stamped with their insertion instant.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Stores `value` under `key`, stamped with `now`.
    ///
    /// An existing entry is replaced wholesale, payload and timestamp alike.
    pub fn insert(&mut self, key: String, value: Bytes, now: Instant) {
        self.entries.insert(key, CacheEntry::stamped(value, now));
    }

    // == Get ==
    /// Returns the payload for `key` unless it is absent or older than
    /// `max_age` as of `now`.
    ///
    /// Never mutates the store: reading an entry does not refresh its age and
    /// an expired entry is left for the next sweep to remove.
    pub fn get(&self, key: &str, now: Instant, max_age: Duration) -> Option<Bytes> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(now, max_age))
            .map(|entry| entry.value.clone())
    }

    // == Reap ==
    /// Removes every entry strictly older than `max_age` as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, now: Instant, max_age: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now, max_age));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the number of stored entries, including expired entries that
    /// have not been swept yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const MAX_AGE: Duration = Duration::from_secs(5);

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_insert_and_get() {
        let mut store = CacheStore::new();
        let now = Instant::now();

        store.insert("key1".to_string(), Bytes::from_static(b"value1"), now);

        assert_eq!(store.get("key1", now, MAX_AGE), Some(Bytes::from_static(b"value1")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = CacheStore::new();

        assert_eq!(store.get("nonexistent", Instant::now(), MAX_AGE), None);
    }

    #[test]
    fn test_store_empty_key_and_value() {
        let mut store = CacheStore::new();
        let now = Instant::now();

        store.insert(String::new(), Bytes::new(), now);

        assert_eq!(store.get("", now, MAX_AGE), Some(Bytes::new()));
    }

    #[test]
    fn test_store_overwrite_replaces_value_and_timestamp() {
        let mut store = CacheStore::new();
        let start = Instant::now();
        let later = start + Duration::from_secs(4);

        store.insert("key1".to_string(), Bytes::from_static(b"value1"), start);
        store.insert("key1".to_string(), Bytes::from_static(b"value2"), later);

        assert_eq!(store.len(), 1);
        // Age is measured from the overwrite, so the first stamp no longer matters
        let check = start + MAX_AGE + Duration::from_secs(1);
        assert_eq!(store.get("key1", check, MAX_AGE), Some(Bytes::from_static(b"value2")));
    }

    #[test]
    fn test_store_get_hides_expired_entry_without_removing_it() {
        let mut store = CacheStore::new();
        let start = Instant::now();

        store.insert("key1".to_string(), Bytes::from_static(b"value1"), start);

        let after = start + MAX_AGE + Duration::from_millis(1);
        assert_eq!(store.get("key1", after, MAX_AGE), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_does_not_refresh_age() {
        let mut store = CacheStore::new();
        let start = Instant::now();

        store.insert("key1".to_string(), Bytes::from_static(b"value1"), start);

        // Repeated reads while live must not extend the lifetime
        for secs in 1..=5 {
            let now = start + Duration::from_secs(secs);
            assert!(store.get("key1", now, MAX_AGE).is_some());
        }

        let removed = store.reap(start + MAX_AGE + Duration::from_millis(1), MAX_AGE);
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_store_reap_removes_only_strictly_older_entries() {
        let mut store = CacheStore::new();
        let start = Instant::now();

        store.insert("old".to_string(), Bytes::from_static(b"1"), start);
        store.insert("boundary".to_string(), Bytes::from_static(b"2"), start + Duration::from_secs(1));
        store.insert("fresh".to_string(), Bytes::from_static(b"3"), start + Duration::from_secs(3));

        let now = start + Duration::from_secs(1) + MAX_AGE;
        let removed = store.reap(now, MAX_AGE);

        assert_eq!(removed, 1);
        assert_eq!(store.len(), 2);
        assert!(store.get("old", now, MAX_AGE).is_none());
        assert!(store.get("boundary", now, MAX_AGE).is_some(), "Age equal to interval survives");
        assert!(store.get("fresh", now, MAX_AGE).is_some());
    }

    #[test]
    fn test_store_reap_empty() {
        let mut store = CacheStore::new();

        assert_eq!(store.reap(Instant::now(), MAX_AGE), 0);
    }
}
