//! Response Cache Module
//!
//! Thread-safe handle over `CacheStore` that owns the background reaper.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

use crate::cache::CacheStore;
use crate::tasks::spawn_reap_task;

// == Response Cache ==
/// Memoizes raw response bodies by key for a fixed lifetime.
///
/// Keys and values are opaque. Every entry lives for one `interval` measured
/// from its most recent `add`; reads never extend that. A background task
/// sweeps expired entries once per `interval` and is aborted when the cache
/// is dropped.
///
/// `add` and `get` take `&self` and can be called from any thread. A single
/// mutex serializes them with each other and with sweeps.
pub struct ResponseCache {
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    reaper: JoinHandle<()>,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// `interval` is both the maximum entry age and the sweep period.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn new(interval: Duration) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new()));
        let reaper = spawn_reap_task(Arc::clone(&store), interval);

        Self {
            store,
            interval,
            reaper,
        }
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry and resetting
    /// its age.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();
        trace!(%key, len = value.len(), "cache add");

        let mut store = self.store.lock();
        store.insert(key, value, Instant::now());
    }

    // == Get ==
    /// Returns the payload stored under `key`.
    ///
    /// `None` covers both a key that was never added and one that has
    /// outlived the interval.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let store = self.store.lock();
        store.get(key, Instant::now(), self.interval)
    }

    /// The maximum age of an entry, also the sweep period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of stored entries, including expired ones awaiting a sweep.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    // == Stop ==
    /// Cancels the reaper. Entries stay readable until they expire but are no
    /// longer swept. Calling this more than once is harmless.
    pub fn stop(&self) {
        self.reaper.abort();
    }

    /// Returns true while the reaper task is alive.
    pub fn is_reaping(&self) -> bool {
        !self.reaper.is_finished()
    }
}

impl fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseCache")
            .field("interval", &self.interval)
            .field("entries", &self.len())
            .finish()
    }
}

impl Drop for ResponseCache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}
