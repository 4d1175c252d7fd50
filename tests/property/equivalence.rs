//! Property-based tests: incremental resolution never changes the answer

use narrowcache::{CacheManager, Contains, Matcher};
use proptest::prelude::*;

fn dataset() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abc]{0,6}", 0..24)
}

fn queries() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abc]{0,5}", 1..16)
}

fn direct_filter(items: &[String], query: &str) -> Vec<String> {
    let mut v: Vec<String> = items.iter().filter(|s| s.contains(query)).cloned().collect();
    v.sort();
    v
}

fn sorted(items: Option<&[String]>) -> Option<Vec<String>> {
    items.map(|s| {
        let mut v = s.to_vec();
        v.sort();
        v
    })
}

/// Every resolve equals a direct scan of the original dataset
#[test]
fn test_incremental_matches_batch_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(dataset(), queries()), |(items, queries)| {
            let mut cache = CacheManager::new(items.clone(), Contains::new());

            for query in &queries {
                let expected = direct_filter(&items, query);
                match sorted(cache.resolve(query)) {
                    Some(found) => prop_assert_eq!(found, expected),
                    None => prop_assert!(expected.is_empty() && !query.is_empty()),
                }
                prop_assert_eq!(cache.len(), items.len());
            }

            Ok(())
        })
        .unwrap();
}

/// Case-insensitive resolution equals a direct scan with the same folding,
/// including Greek sigma whose word-final form differs
#[test]
fn test_case_insensitive_incremental_matches_batch_property() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let mixed_case = prop::collection::vec("[aAΣσςτΤ]{0,6}", 0..24);
    let mixed_queries = prop::collection::vec("[aAΣσςτΤ]{0,5}", 1..16);

    runner
        .run(&(mixed_case, mixed_queries), |(items, queries)| {
            let matcher = Contains::case_insensitive();
            let mut cache = CacheManager::new(items.clone(), matcher);

            for query in &queries {
                let mut expected: Vec<String> = items
                    .iter()
                    .filter(|item| matcher.matches(*item, query))
                    .cloned()
                    .collect();
                expected.sort();
                match sorted(cache.resolve(query)) {
                    Some(found) => prop_assert_eq!(found, expected),
                    None => prop_assert!(expected.is_empty() && !query.is_empty()),
                }
            }

            Ok(())
        })
        .unwrap();
}

/// Resolving a longer query never yields items the shorter one excluded
#[test]
fn test_monotonic_narrowing_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(dataset(), "[abc]{0,3}", "[abc]{0,3}"),
            |(items, prefix, suffix)| {
                let longer = format!("{}{}", prefix, suffix);
                let mut cache = CacheManager::new(items, Contains::new());

                let broad = sorted(cache.resolve(&prefix)).unwrap_or_default();
                let narrow = sorted(cache.resolve(&longer)).unwrap_or_default();

                for item in &narrow {
                    prop_assert!(broad.contains(item));
                }
                prop_assert!(narrow.len() <= broad.len());

                Ok(())
            },
        )
        .unwrap();
}

/// Resolving the same query twice gives the same answer without rescanning
#[test]
fn test_idempotence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(dataset(), queries()), |(items, queries)| {
            let mut cache = CacheManager::new(items, Contains::new());

            for query in &queries {
                let first = sorted(cache.resolve(query));
                let scanned = cache.stats().items_scanned;
                let second = sorted(cache.resolve(query));

                prop_assert_eq!(first.clone(), second);
                if first.is_some() {
                    prop_assert_eq!(cache.stats().items_scanned, scanned);
                }
            }

            Ok(())
        })
        .unwrap();
}

/// q1, then a deeper q2 (matching or not), then q1 again returns the first answer
#[test]
fn test_backtrack_round_trip_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(dataset(), "[abc]{0,3}", "[abcd]{1,3}"),
            |(items, q1, suffix)| {
                let q2 = format!("{}{}", q1, suffix);
                let mut cache = CacheManager::new(items, Contains::new());

                let first = sorted(cache.resolve(&q1));
                cache.resolve(&q2);
                let again = sorted(cache.resolve(&q1));

                prop_assert_eq!(first, again);

                Ok(())
            },
        )
        .unwrap();
}

/// No item is lost or duplicated, whatever the query sequence
#[test]
fn test_conservation_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(dataset(), queries()), |(items, queries)| {
            let mut cache = CacheManager::new(items.clone(), Contains::new());
            for query in &queries {
                cache.resolve(query);
            }

            let mut recovered = cache.into_items();
            recovered.sort();
            let mut expected = items;
            expected.sort();
            prop_assert_eq!(recovered, expected);

            Ok(())
        })
        .unwrap();
}
