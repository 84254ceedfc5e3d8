#![cfg(test)]

use super::*;
use crate::collections::contiguous::ArrayList;
use crate::util::hash::{BadHasherBuilder, ManualHash};

#[test]
fn test_set_semantics() {
    let mut set: HashSet<_> = HashSet::new();
    assert!(set.add("a"));
    assert!(set.add("b"));
    assert!(!set.add("a"), "Adding an existing value should be rejected.");
    assert_eq!(set.len(), 2, "A rejected add shouldn't change the length.");

    assert!(set.has("a"));
    assert!(set.remove("a"));
    assert!(!set.has("a"));
    assert!(!set.remove("a"));

    assert_eq!(set.take("b"), Some("b"));
    assert!(set.is_empty());
}

#[test]
fn test_hash_collisions() {
    let mut set = HashSet::with_hasher(BadHasherBuilder);
    set.add(ManualHash::new(0, "zero"));
    set.add(ManualHash::new(0, "one"));
    set.add(ManualHash::new(2, "two"));
    set.add(ManualHash::new(0, "three"));
    set.add(ManualHash::new(2, "four"));
    set.add(ManualHash::new(1, "five"));

    set.remove(&ManualHash::new(0, "zero"));
    set.remove(&ManualHash::new(2, "two"));

    assert_eq!(
        &*set.into_iter().map(|i| i.value()).collect::<ArrayList<_>>(),
        &["one", "three", "four", "five"],
        "HashSet should handle hash collisions so that no elements are lost during removal."
    );

    let mut set = HashSet::with_cap_and_hasher(6, BadHasherBuilder);
    set.add(ManualHash::new(5, "zero"));
    set.add(ManualHash::new(5, "one"));
    set.add(ManualHash::new(1, "two"));
    set.add(ManualHash::new(5, "three"));

    set.remove(&ManualHash::new(5, "zero"));

    assert_eq!(
        &*set.into_iter().map(|i| i.value()).collect::<ArrayList<_>>(),
        &["three", "two", "one"],
        "Hash collisions should be handled in a wrapping manner."
    );
}

#[test]
fn test_iteration_and_formatting() {
    let set: HashSet<_> = (1..=5).chain(3..=7).collect();
    assert_eq!(set.len(), 7, "Duplicates should be collapsed.");
    assert_eq!(set.values().sum::<i32>(), 28);
    assert!(set.entries().all(|(a, b)| a == b));

    let mut count = 0;
    set.for_each(|value, key, set| {
        assert_eq!(value, key);
        assert!(set.has(value));
        count += 1;
    });
    assert_eq!(count, 7);

    let cloned = set.clone();
    assert_eq!(cloned, set);

    let mut set = HashSet::with_cap_and_hasher(4, BadHasherBuilder);
    set.add(2_u64);
    set.add(1_u64);
    assert_eq!(set.to_string(), "#{1, 2}");
    assert_eq!(
        format!("{set:?}"),
        "HashSet { contents: [1, 2], len: 2, cap: 4, hasher: BadHasherBuilder }"
    );

    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.cap(), 4);
}
