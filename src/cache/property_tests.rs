//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check store behavior over generated operation sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 100;
const TEST_TTL: Duration = Duration::from_secs(300);
const REGIONS: [&str; 3] = ["products", "productById", "externalQuotes"];

// == Strategies ==
fn region_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(REGIONS.to_vec())
}

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,32}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,128}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { region: &'static str, key: String, value: String },
    Get { region: &'static str, key: String },
    EvictAll { region: &'static str },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (region_strategy(), key_strategy(), value_strategy())
            .prop_map(|(region, key, value)| CacheOp::Put { region, key, value }),
        4 => (region_strategy(), key_strategy())
            .prop_map(|(region, key)| CacheOp::Get { region, key }),
        1 => region_strategy().prop_map(|region| CacheOp::EvictAll { region }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a value and reading it back within TTL yields exactly that value.
    #[test]
    fn prop_put_then_get_roundtrip(
        region in region_strategy(),
        key in key_strategy(),
        value in value_strategy()
    ) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_TTL);

        store.put(region, &key, value.clone());

        prop_assert_eq!(store.get(region, &key), Some(value));
    }

    // A key written in one region is never visible from another.
    #[test]
    fn prop_regions_do_not_leak(
        key in key_strategy(),
        value in value_strategy()
    ) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_TTL);

        store.put(REGIONS[0], &key, value);

        prop_assert!(store.get(REGIONS[1], &key).is_none());
        prop_assert!(store.get(REGIONS[2], &key).is_none());
    }

    // Hit/miss counters and entry counts track every operation.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_TTL);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Put { region, key, value } => store.put(region, &key, value),
                CacheOp::Get { region, key } => match store.get(region, &key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::EvictAll { region } => {
                    store.evict_all(region);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, store.len());
    }

    // The total entry count across regions never exceeds the bound.
    #[test]
    fn prop_capacity_enforcement(ops in prop::collection::vec(cache_op_strategy(), 1..200)) {
        let max_entries = 20;
        let mut store = CacheStore::new(max_entries, TEST_TTL);

        for op in ops {
            if let CacheOp::Put { region, key, value } = op {
                store.put(region, &key, value);
            }
            prop_assert!(
                store.len() <= max_entries,
                "Cache size {} exceeds max {}",
                store.len(),
                max_entries
            );
        }
    }

    // After evict_all, nothing from that region is visible and the others
    // keep every entry they had.
    #[test]
    fn prop_evict_all_clears_only_its_region(
        entries in prop::collection::vec(
            (region_strategy(), key_strategy(), value_strategy()),
            1..50
        ),
        target in region_strategy()
    ) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_TTL);
        for (region, key, value) in &entries {
            store.put(region, key, value.clone());
        }
        let survivors: Vec<(&str, String, Option<String>)> = entries
            .iter()
            .filter(|(region, _, _)| *region != target)
            .map(|(region, key, _)| (*region, key.clone(), store.get(region, key)))
            .collect();

        store.evict_all(target);

        for (region, key, _) in &entries {
            if *region == target {
                prop_assert!(store.get(region, key).is_none());
            }
        }
        for (region, key, before) in survivors {
            prop_assert_eq!(store.get(region, &key), before);
        }
        prop_assert_eq!(store.region_len(target), 0);
    }

    // Filling to capacity and adding one new entry evicts the first-written
    // entry and nothing else.
    #[test]
    fn prop_oldest_written_is_evicted(
        keys in prop::collection::vec(key_strategy(), 2..12),
        new_key in key_strategy(),
        probe in 0usize..12
    ) {
        let unique: Vec<String> = keys
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        prop_assume!(unique.len() >= 2);
        prop_assume!(!unique.contains(&new_key));

        let capacity = unique.len();
        let mut store = CacheStore::new(capacity, TEST_TTL);
        for key in &unique {
            store.put("r", key, format!("value_{}", key));
        }

        // Reads must not change eviction order
        let _ = store.get("r", &unique[probe % capacity]);

        store.put("r", &new_key, "new".to_string());

        prop_assert_eq!(store.len(), capacity);
        prop_assert!(store.get("r", &unique[0]).is_none());
        prop_assert!(store.get("r", &new_key).is_some());
        for key in unique.iter().skip(1) {
            prop_assert!(store.get("r", key).is_some());
        }
    }
}
