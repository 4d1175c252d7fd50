//! Integration tests for the resolve state machine
//!
//! Tests cover:
//! - The apple/banana/grape walkthrough
//! - Failed narrowing leaving the cache untouched
//! - Backtrack round-trips after successful and failed deeper queries
//! - Conservation of the dataset across frames

use super::test_utils::{direct_filter, fruit_cache, sorted, FRUIT};

#[test]
fn test_fruit_walkthrough() {
    let mut cache = fruit_cache();

    assert_eq!(sorted(cache.resolve("app")), Some(vec!["apple", "apples"]));
    assert_eq!(sorted(cache.resolve("appl")), Some(vec!["apple", "apples"]));

    let keys_before: Vec<String> = cache.keys().map(String::from).collect();
    assert_eq!(cache.resolve("applz"), None);
    let keys_after: Vec<String> = cache.keys().map(String::from).collect();
    assert_eq!(keys_before, keys_after);

    assert_eq!(sorted(cache.resolve("appl")), Some(vec!["apple", "apples"]));

    // "grape" contains "ap" too, so backtracking restores it alongside the apples.
    assert_eq!(
        sorted(cache.resolve("ap")),
        Some(vec!["apple", "apples", "grape"])
    );
    assert_eq!(sorted(cache.resolve("ap")).unwrap(), direct_filter(FRUIT, "ap"));
}

#[test]
fn test_round_trip_after_successful_deeper_query() {
    let mut cache = fruit_cache();
    let first = sorted(cache.resolve("a"));

    assert_eq!(sorted(cache.resolve("apples")), Some(vec!["apples"]));
    assert_eq!(sorted(cache.resolve("a")), first);
}

#[test]
fn test_round_trip_after_failed_deeper_query() {
    let mut cache = fruit_cache();
    let first = sorted(cache.resolve("an"));

    assert_eq!(cache.resolve("anx"), None);
    assert_eq!(sorted(cache.resolve("an")), first);
    assert_eq!(first, Some(vec!["banana"]));
}

#[test]
fn test_repeated_failing_query_rescans_each_time() {
    let mut cache = fruit_cache();
    cache.resolve("gr");

    assert_eq!(cache.resolve("grz"), None);
    let after_first = cache.stats();
    assert_eq!(cache.resolve("grz"), None);
    let after_second = cache.stats();

    assert_eq!(after_second.misses, after_first.misses + 1);
    assert_eq!(after_second.items_scanned, after_first.items_scanned + 1);
}

#[test]
fn test_unknown_first_character_is_not_found() {
    let mut cache = fruit_cache();
    assert_eq!(cache.resolve("q"), None);
    assert_eq!(cache.resolve("qu"), None);
    assert_eq!(cache.depth(), 1);
    assert_eq!(cache.len(), FRUIT.len());
}

#[test]
fn test_items_are_conserved_across_frames() {
    let mut cache = fruit_cache();
    for query in ["b", "ban", "apple", "gr", "", "nan", "applz"] {
        cache.resolve(query);
        assert_eq!(cache.len(), FRUIT.len(), "after {:?}", query);
    }

    let mut items = cache.into_items();
    items.sort();
    let mut expected = FRUIT.to_vec();
    expected.sort();
    assert_eq!(items, expected);
}

#[test]
fn test_stats_track_work() {
    let mut cache = fruit_cache();
    cache.resolve("ban");
    cache.resolve("ban");
    cache.resolve("b");

    let stats = cache.stats();
    assert_eq!(stats.resolves, 3);
    assert_eq!(stats.narrows, 3);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.backtracks, 2);
    assert_eq!(stats.misses, 0);
}
