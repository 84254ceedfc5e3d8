#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::contiguous::ArrayList;
use crate::util::alloc::CountedDrop;
use crate::util::hash::{BadHasherBuilder, ManualHash};

#[test]
fn test_set_get_remove() {
    let mut map: HashMap<_, _> = HashMap::new();
    assert_eq!(map.cap(), 0, "A new HashMap shouldn't allocate.");
    assert_eq!(map.get("missing"), None, "Lookups should work without any capacity.");

    assert_eq!(map.set("one", 1), None);
    assert_eq!(map.set("two", 2), None);
    assert_eq!(map.set("one", 10), Some(1), "Setting an existing key should return the old value.");
    assert_eq!(map.len(), 2, "Overwriting shouldn't change the length.");

    assert_eq!(map.get("one"), Some(&10));
    assert_eq!(map.get_entry("two"), Some((&"two", &2)));
    assert!(map.has_key("two"));
    assert!(map.has_value(&10));
    assert!(!map.has_value(&1));

    assert!(map.replace("two", 20));
    assert!(!map.replace("three", 3), "Replace should only affect existing keys.");
    assert!(!map.has_key("three"));
    assert_eq!(map.get("two"), Some(&20));

    if let Some(value) = map.get_mut("one") {
        *value += 1;
    }
    assert_eq!(map.remove("one"), Some(11));
    assert!(!map.has_key("one"));
    assert_eq!(map.remove("one"), None);
    assert_eq!(map.remove_entry("two"), Some(("two", 20)));
    assert!(map.is_empty());
}

#[test]
fn test_hash_collisions() {
    let mut map = HashMap::with_hasher(BadHasherBuilder);
    for (i, (hash, name)) in [(0, "zero"), (0, "one"), (2, "two"), (0, "three"), (2, "four"), (1, "five")]
        .into_iter()
        .enumerate()
    {
        map.set(ManualHash::new(hash, name), i);
    }
    assert_eq!(map.cap(), 8);

    map.remove(&ManualHash::new(0, "zero"));
    map.remove(&ManualHash::new(2, "two"));

    assert_eq!(map.get(&ManualHash::new(0, "three")), Some(&3), "Collided keys should stay reachable.");
    assert_eq!(map.get(&ManualHash::new(1, "five")), Some(&5));
    assert_eq!(
        &*map.into_keys().map(|k| k.value()).collect::<ArrayList<_>>(),
        &["one", "three", "four", "five"],
        "HashMap should handle hash collisions so that no elements are lost during removal."
    );

    let mut map = HashMap::with_cap_and_hasher(6, BadHasherBuilder);
    map.set(ManualHash::new(5, "zero"), ());
    map.set(ManualHash::new(5, "one"), ());
    map.set(ManualHash::new(1, "two"), ());
    map.set(ManualHash::new(5, "three"), ());

    map.remove(&ManualHash::new(5, "zero"));

    assert_eq!(
        &*map.into_keys().map(|k| k.value()).collect::<ArrayList<_>>(),
        &["three", "two", "one"],
        "Hash collisions should be handled in a wrapping manner."
    );
}

#[test]
fn test_capacity() {
    let mut map: HashMap<u32, u32> = HashMap::new();
    map.reserve(0);
    assert_eq!(map.cap(), 0, "Reserving nothing shouldn't allocate.");

    map.reserve(10);
    assert_eq!(map.cap(), 13);
    for i in 0..10 {
        map.set(i, i);
    }
    assert_eq!(map.cap(), 13, "Reserved capacity should fit every entry without growing.");

    map.set(10, 10);
    assert_eq!(map.cap(), 26, "Capacity should double once the load factor is reached.");
    assert_eq!(map.try_reserve(usize::MAX), Err(CapacityOverflow));

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.cap(), 26, "Clearing shouldn't deallocate.");
    assert_eq!(map.get(&3), None);
}

#[test]
fn test_iteration() {
    let mut map: HashMap<_, _> = (0..20_u32).map(|i| (i, i * 2)).collect();
    assert_eq!(map.len(), 20);
    assert_eq!(map.keys().sum::<u32>(), (0..20).sum());
    assert_eq!(map.iter().len(), 20);
    assert_eq!(map.entries().filter(|(k, v)| **v == **k * 2).count(), 20);

    for value in map.values_mut() {
        *value += 1;
    }
    assert_eq!(map.get(&7), Some(&15));

    let mut visited = 0;
    map.for_each(|value, key, map| {
        assert_eq!(map.get(key), Some(value));
        visited += 1;
    });
    assert_eq!(visited, 20);

    let mut values: ArrayList<_> = map.into_values().collect();
    values.sort();
    assert_eq!(&*values, &*(0..20).map(|i| i * 2 + 1).collect::<ArrayList<_>>());
}

#[test]
fn test_equality_and_formatting() {
    let mut a: HashMap<_, _> = HashMap::with_cap(50);
    a.set('x', 1);
    a.set('y', 2);
    let b: HashMap<_, _> = [('y', 2), ('x', 1)].into_iter().collect();
    assert_eq!(a, b, "Equality shouldn't depend on capacity or insertion order.");

    let mut c = b.clone();
    c.set_all(&b);
    assert_eq!(c, b, "Setting entries that already exist shouldn't change anything.");
    c.set_all(&[('z', 3)].into_iter().collect::<HashMap<_, _>>());
    assert_eq!(c.len(), 3);
    assert_ne!(c, b);

    let single: HashMap<_, _> = [("a", 1)].into_iter().collect();
    assert_eq!(single.to_string(), "#{\"a\": 1}");

    let mut map = HashMap::with_cap_and_hasher(2, BadHasherBuilder);
    map.set(1_u64, "one");
    assert_eq!(
        format!("{map:?}"),
        "HashMap { buckets: [-, (1: \"one\")], len: 1, cap: 2, hasher: BadHasherBuilder }"
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut map: HashMap<_, _> = iter::repeat_with(|| counter.clone()).take(6).enumerate().collect();
    assert_eq!(*counter.borrow(), 0);

    drop(map.remove(&2));
    assert_eq!(*counter.borrow(), 1);
    assert_eq!(map.set(0, counter.clone()).map(drop), Some(()));
    assert_eq!(*counter.borrow(), 2, "Overwritten values should be returned, then dropped here.");

    drop(map);
    assert_eq!(counter.take(), 7);
}
