#![cfg(test)]

use super::*;
use crate::collections::hash::{DEFAULT_CAP, KeyNotFound, LinearHash, MIN_CAP};
use crate::util::logger::init_test_logger;

#[test]
fn test_new_capacity() {
    assert_eq!(ChainedHashTable::new().cap(), DEFAULT_CAP);
    assert_eq!(
        ChainedHashTable::with_cap(0).cap(), DEFAULT_CAP,
        "A capacity of 0 should fall back to the default."
    );
    assert_eq!(ChainedHashTable::with_cap(1).cap(), MIN_CAP);
    assert_eq!(ChainedHashTable::with_cap(5).cap(), 5);

    let table = ChainedHashTable::with_cap(16);
    assert_eq!(table.len(), 0);
    assert!(table.is_empty());
    assert_eq!(table.load_factor(), 0.0);
}

#[test]
fn test_insert_get() {
    let mut table = ChainedHashTable::with_cap(16);
    assert_eq!(table.insert(1, 100), None);
    assert_eq!(table.insert(2, 200), None);
    assert_eq!(table.insert(3, 300), None);

    assert_eq!(table.len(), 3);
    assert_eq!(table.get(1), Ok(100));
    assert_eq!(table.get(2), Ok(200));
    assert_eq!(table.get(3), Ok(300));
    assert_eq!(table.get(999), Err(KeyNotFound { key: 999 }));
    assert_eq!(table.load_factor(), 3.0 / 16.0);
}

#[test]
fn test_update_in_place() {
    let mut table = ChainedHashTable::with_cap(16);
    table.insert(1, 100);
    assert_eq!(
        table.insert(1, 200), Some(100),
        "Inserting an existing key should return the previous value."
    );

    assert_eq!(table.len(), 1, "Updating a key shouldn't change the length.");
    assert_eq!(table.get(1), Ok(200));
}

#[test]
fn test_chain_order() {
    let mut table = ChainedHashTable::with_cap(4);
    // 1 and 5 both hash to bucket 1.
    table.insert(1, 10);
    table.insert(5, 50);
    table.insert(2, 20);

    assert_eq!(
        table.iter().collect::<Vec<_>>(),
        [(5, 50), (1, 10), (2, 20)],
        "Entries should be visited by bucket, newest first within a chain."
    );
}

#[test]
fn test_remove() {
    let mut table = ChainedHashTable::with_cap(4);
    for key in [1, 5, 9, 13] {
        table.insert(key, key * 10);
    }
    assert_eq!(table.cap(), 8, "The fourth insertion should have found the table at 3/4.");

    // 13 -> 5 and 1 -> 9 share buckets at capacity 8.
    assert_eq!(table.remove(5), Ok(50));
    assert_eq!(table.remove(13), Ok(130));
    assert_eq!(table.remove(1), Ok(10));

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(9), Ok(90), "Removing neighbours shouldn't lose the rest of a chain.");
    assert!(!table.contains(5));
    assert_eq!(table.remove(5), Err(KeyNotFound { key: 5 }));
    assert_eq!(table.load_factor(), 1.0 / 8.0);
}

#[test]
fn test_remove_then_reinsert() {
    let mut table = ChainedHashTable::with_cap(16);
    table.insert(7, 70);
    table.remove(7).expect("key was just inserted");
    table.insert(7, 71);
    table.insert(23, 230);

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(7), Ok(71));
    assert_eq!(table.get(23), Ok(230));
}

#[test]
fn test_resize() {
    init_test_logger();

    let mut table = ChainedHashTable::with_cap(4);
    for key in 0..10 {
        table.insert(key, key * 10);
        assert!(
            table.load_factor() <= 0.75 + 1.0 / table.cap() as f64,
            "The table should grow before exceeding its load factor."
        );
    }

    assert!(table.cap() > 4, "The table should have grown.");
    assert_eq!(table.len(), 10);
    for key in 0..10 {
        assert_eq!(table.get(key), Ok(key * 10), "Every key should survive a resize.");
    }
}

#[test]
fn test_resize_threshold() {
    let mut table = ChainedHashTable::with_cap(8);
    for key in 0..6 {
        table.insert(key, key);
    }
    assert_eq!(table.cap(), 8, "Reaching 3/4 shouldn't grow the table by itself.");

    table.insert(6, 6);
    assert_eq!(table.cap(), 16, "The next insertion at 3/4 should double the capacity.");

    // Updates check the threshold too.
    let mut table = ChainedHashTable::with_cap(4);
    for key in 0..3 {
        table.insert(key, key);
    }
    table.insert(0, 1);
    assert_eq!(table.cap(), 8);
    assert_eq!(table.len(), 3);
}

#[test]
fn test_nodes_sized_by_entries() {
    let mut table = ChainedHashTable::with_cap(1 << 16);
    assert_eq!(table.nodes.reserved(), 0, "An empty table shouldn't reserve nodes for every bucket.");

    table.extend((0..4).map(|k| (k, k)));
    table.realloc_with_cap(1 << 17);
    assert!(table.nodes.reserved() >= 4, "A rehash should reserve room for the existing entries.");
    assert!(table.nodes.reserved() < 1 << 16);
    assert!((0..4).all(|k| table.get(k) == Ok(k)));
}

#[test]
fn test_clear() {
    let mut table = ChainedHashTable::with_cap(4);
    for key in 0..10 {
        table.insert(key, key * 10);
    }
    let cap = table.cap();

    table.clear();
    assert_eq!(table.len(), 0);
    assert_eq!(table.load_factor(), 0.0);
    assert_eq!(table.cap(), cap, "Clearing should keep the capacity.");
    assert!(!table.contains(3));
    assert_eq!(table.iter().count(), 0);

    table.insert(3, 30);
    assert_eq!(table.get(3), Ok(30));
}

#[test]
fn test_negative_keys() {
    let mut table = ChainedHashTable::with_cap(16);
    for key in -20..20 {
        table.insert(key, -key);
    }

    assert_eq!(table.len(), 40);
    for key in -20..20 {
        assert_eq!(table.get(key), Ok(-key));
    }
    assert_eq!(table.remove(i32::MIN), Err(KeyNotFound { key: i32::MIN }));
}

#[test]
fn test_size_tracks_distinct_keys() {
    let mut table = ChainedHashTable::with_cap(2);
    let mut expected = std::collections::BTreeMap::new();

    // A deterministic mix of inserts, updates and removes.
    for step in 0..500_i32 {
        let key = (step * 37) % 61;
        if step % 3 == 0 {
            assert_eq!(table.remove(key).ok(), expected.remove(&key));
        } else {
            assert_eq!(table.insert(key, step), expected.insert(key, step));
        }
        assert_eq!(table.len(), expected.len());
    }

    let mut entries: Vec<_> = table.iter().collect();
    entries.sort();
    assert_eq!(entries, expected.into_iter().collect::<Vec<_>>());
}

#[test]
fn test_custom_hasher() {
    let hasher = LinearHash::new(31, 7, 101).expect("modulus is positive");
    let mut table = ChainedHashTable::with_hasher(hasher);
    table.extend((0..50).map(|k| (k, k + 1)));

    assert_eq!(table.hasher(), hasher, "The hasher should be kept through resizes.");
    assert_eq!(table.len(), 50);
    assert!((0..50).all(|k| table.get(k) == Ok(k + 1)));
}

#[test]
fn test_collect_and_format() {
    let table: ChainedHashTable = [(2, 20), (1, 10)].into_iter().collect();
    assert_eq!(table.to_string(), "#{1: 10, 2: 20}");

    let debug = format!("{table:?}");
    assert!(debug.starts_with("ChainedHashTable { buckets: [-, (1: 10), (2: 20), -,"));
    assert!(debug.ends_with("len: 2, cap: 16, hasher: LinearHash { a: 1, b: 0, p: 1000000007 } }"));
}
