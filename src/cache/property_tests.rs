//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against its contract with explicit
//! instants, so no test here depends on wall-clock timing.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_INTERVAL: Duration = Duration::from_secs(5);

// == Strategies ==
/// Generates arbitrary keys, including the empty string
fn key_strategy() -> impl Strategy<Value = String> {
    ".{0,64}"
}

/// Generates arbitrary payloads, including the empty payload
fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

/// Generates a sequence of store operations for model testing
#[derive(Debug, Clone)]
enum CacheOp {
    Insert { key: String, value: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    // Small key space so inserts and gets collide often
    let key = "[a-d]{0,2}";
    prop_oneof![
        (key, payload_strategy()).prop_map(|(key, value)| CacheOp::Insert { key, value }),
        key.prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Round trip: storing a payload and reading it back before expiry
    // returns exactly that payload.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in payload_strategy()) {
        let mut store = CacheStore::new();
        let now = Instant::now();

        store.insert(key.clone(), Bytes::from(value.clone()), now);

        let retrieved = store.get(&key, now, TEST_INTERVAL);
        prop_assert_eq!(retrieved.as_deref(), Some(value.as_slice()), "Round-trip value mismatch");
    }

    // Absence: a key that was never inserted reads as absent.
    #[test]
    fn prop_absent_key(
        stored in prop::collection::hash_map(key_strategy(), payload_strategy(), 0..20),
        probe in key_strategy()
    ) {
        prop_assume!(!stored.contains_key(&probe));

        let mut store = CacheStore::new();
        let now = Instant::now();
        for (key, value) in stored {
            store.insert(key, Bytes::from(value), now);
        }

        prop_assert!(store.get(&probe, now, TEST_INTERVAL).is_none());
    }

    // Overwrite: the second payload fully replaces the first.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in payload_strategy(),
        value2 in payload_strategy()
    ) {
        let mut store = CacheStore::new();
        let now = Instant::now();

        store.insert(key.clone(), Bytes::from(value1), now);
        store.insert(key.clone(), Bytes::from(value2.clone()), now);

        let retrieved = store.get(&key, now, TEST_INTERVAL);
        prop_assert_eq!(retrieved.as_deref(), Some(value2.as_slice()), "Overwrite should return new value");
        prop_assert_eq!(store.len(), 1, "Should have exactly one entry after overwrite");
    }

    // Any interleaving of inserts and gets behaves like a plain map while
    // nothing has expired.
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..64)) {
        let mut store = CacheStore::new();
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();
        let now = Instant::now();

        for op in ops {
            match op {
                CacheOp::Insert { key, value } => {
                    store.insert(key.clone(), Bytes::from(value.clone()), now);
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    let got = store.get(&key, now, TEST_INTERVAL);
                    prop_assert_eq!(got.as_deref(), model.get(&key).map(Vec::as_slice));
                }
            }
        }

        prop_assert_eq!(store.len(), model.len());
    }

    // A sweep removes exactly the entries strictly older than the interval,
    // and reads agree with the sweep about which entries are live.
    #[test]
    fn prop_reap_removes_only_strictly_older(
        ages_ms in prop::collection::vec(0u64..10_000, 1..40)
    ) {
        let mut store = CacheStore::new();
        let base = Instant::now();
        let now = base + Duration::from_secs(10);

        for (i, age_ms) in ages_ms.iter().enumerate() {
            let created = now - Duration::from_millis(*age_ms);
            store.insert(format!("key{}", i), Bytes::from_static(b"v"), created);
        }

        let interval_ms = TEST_INTERVAL.as_millis() as u64;
        for (i, age_ms) in ages_ms.iter().enumerate() {
            let live = store.get(&format!("key{}", i), now, TEST_INTERVAL).is_some();
            prop_assert_eq!(live, *age_ms <= interval_ms);
        }

        let expected_removed = ages_ms.iter().filter(|age| **age > interval_ms).count();
        let removed = store.reap(now, TEST_INTERVAL);

        prop_assert_eq!(removed, expected_removed);
        prop_assert_eq!(store.len(), ages_ms.len() - expected_removed);
    }
}
