//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check store behavior over generated operation sequences.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates resource-locator-shaped keys
fn locator_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,24}".prop_map(|s| format!("https://pokeapi.co/api/v2/pokemon/{}", s))
}

/// Generates arbitrary payload bytes
fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (locator_strategy(), payload_strategy())
            .prop_map(|(key, value)| CacheOp::Add { key, value }),
        locator_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every get observes the last value added for its key, and the hit/miss
    // counters match what a plain HashMap model predicts.
    #[test]
    fn prop_store_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_TTL);
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Add { key, value } => {
                    store.add(key.clone(), value.clone());
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    let got = store.get(&key);
                    prop_assert_eq!(got.as_ref(), model.get(&key), "Value mismatch for {}", key);
                    if got.is_some() {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, model.len(), "Total entries mismatch");
    }

    #[test]
    fn prop_overwrite_semantics(
        key in locator_strategy(),
        value1 in payload_strategy(),
        value2 in payload_strategy()
    ) {
        let mut store = CacheStore::new(TEST_TTL);

        store.add(key.clone(), value1);
        store.add(key.clone(), value2.clone());

        prop_assert_eq!(store.get(&key), Some(value2));
        prop_assert_eq!(store.len(), 1);
    }

    // Distinct keys added from concurrent tasks are all retained.
    #[test]
    fn prop_concurrent_distinct_adds_are_not_lost(
        keys in prop::collection::hash_set(locator_strategy(), 1..40)
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let store = Arc::new(Mutex::new(CacheStore::new(TEST_TTL)));

            let handles: Vec<_> = keys
                .iter()
                .cloned()
                .map(|key| {
                    let store = Arc::clone(&store);
                    tokio::spawn(async move {
                        let value = key.clone().into_bytes();
                        store.lock().await.add(key, value);
                    })
                })
                .collect();

            for handle in handles {
                handle.await.expect("Task should not panic");
            }

            let mut cache = store.lock().await;
            prop_assert_eq!(cache.len(), keys.len());
            for key in &keys {
                prop_assert_eq!(cache.get(key), Some(key.clone().into_bytes()));
            }

            Ok(())
        })?;
    }
}

// Fewer cases for the sleep-based TTL properties
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // Entries past their TTL stay readable until a sweep removes them; the
    // sweep removes exactly those.
    #[test]
    fn prop_sweep_is_sole_expiry_path(
        stale_keys in prop::collection::hash_set(locator_strategy(), 1..10),
        fresh_keys in prop::collection::hash_set(locator_strategy(), 1..10)
    ) {
        let ttl = Duration::from_millis(100);
        let mut store = CacheStore::new(ttl);
        let fresh_keys: HashSet<String> = fresh_keys.difference(&stale_keys).cloned().collect();

        for key in &stale_keys {
            store.add(key.clone(), b"stale".to_vec());
        }
        sleep(ttl + Duration::from_millis(50));
        for key in &fresh_keys {
            store.add(key.clone(), b"fresh".to_vec());
        }

        for key in &stale_keys {
            prop_assert_eq!(store.get(key), Some(b"stale".to_vec()));
        }

        let removed = store.cleanup_expired();
        prop_assert_eq!(removed, stale_keys.len());
        prop_assert_eq!(store.len(), fresh_keys.len());
        for key in &stale_keys {
            prop_assert!(store.get(key).is_none());
        }
    }
}
