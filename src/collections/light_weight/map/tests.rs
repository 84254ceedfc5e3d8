#![cfg(test)]

use super::*;
use crate::collections::contiguous::ArrayList;
use crate::util::hash::BadHasherBuilder;
use crate::util::panic::assert_panics;

#[test]
fn test_insertion_order() {
    let mut map: LightWeightMap<_, _> = LightWeightMap::new();
    assert_eq!(map.set("c", 3), None);
    assert_eq!(map.set("a", 1), None);
    assert_eq!(map.set("b", 2), None);
    assert_eq!(map.set("a", 10), Some(1));

    assert_eq!(
        &*map.keys().copied().collect::<ArrayList<_>>(),
        &["c", "a", "b"],
        "Updating a key shouldn't move it."
    );
    assert_eq!(map.to_string(), "c:3,a:10,b:2");
    assert_eq!(map.get_index_of_key("b"), Some(2));
    assert_eq!(map.get_index_of_value(&10), Some(1));
    assert_eq!(map.get_index_of_key("z"), None);
    assert!(map.has_key("c"));
    assert!(map.has_value(&2));
    assert!(!map.has_value(&1));
}

#[test]
fn test_positional_access() {
    let mut map: LightWeightMap<_, _> = [('x', 1), ('y', 2), ('z', 3)].into_iter().collect();
    assert_eq!(*map.get_key_at(1), 'y');
    assert_eq!(*map.get_value_at(2), 3);
    assert_eq!(map.try_get_key_at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert!(map.try_get_value_at(3).is_err());

    assert!(map.set_value_at(0, 100));
    assert!(!map.set_value_at(3, 4), "Setting past the end should fail without side effects.");
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&'x'), Some(&100));

    assert_eq!(map.remove_at(1), ('y', 2));
    assert_eq!(map.get_index_of_key(&'z'), Some(1), "Removal should splice every backing list.");
    assert_eq!(map.remove(&'z'), Some(3));
    assert_eq!(map.remove(&'z'), None);
    assert_eq!(map.try_remove_at(1), Err(IndexOutOfBounds { index: 1, len: 1 }));
    assert_panics!({
        let mut map: LightWeightMap<u8, u8> = LightWeightMap::new();
        map.remove_at(0);
    });
}

#[test]
fn test_capacity() {
    let mut map: LightWeightMap<_, _> = LightWeightMap::new();
    assert_eq!(map.cap(), 8);
    for i in 0..8 {
        map.set(i, i);
    }
    assert_eq!(map.cap(), 8);
    map.set(8, 8);
    assert_eq!(map.cap(), 16, "Capacity should double when a full map gets a new key.");

    map.increase_capacity_to(10);
    assert_eq!(map.cap(), 16, "Capacity hints below the current capacity should be ignored.");
    map.increase_capacity_to(40);
    assert_eq!(map.cap(), 40);
    assert_eq!(map.len(), 9, "Capacity hints shouldn't affect the length.");

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.cap(), 8, "Clearing a grown map should return to the baseline capacity.");

    map.set(1, 1);
    map.clear();
    assert_eq!(map.cap(), 8);
}

#[test]
fn test_bulk_operations() {
    let source: LightWeightMap<_, _> = [("a", 1), ("b", 2)].into_iter().collect();

    let mut empty: LightWeightMap<_, _> = LightWeightMap::new();
    empty.set_all(&source);
    assert_eq!(empty, source, "Bulk copying into an empty map should copy every entry.");
    assert_eq!(empty.get("b"), Some(&2), "Copied entries should be hashed with the new hasher.");

    let mut merged: LightWeightMap<_, _> = [("b", 20), ("c", 3)].into_iter().collect();
    merged.set_all(&source);
    assert_eq!(merged.to_string(), "b:2,c:3,a:1");

    assert!(merged.has_all(&source));
    assert!(!source.has_all(&merged), "A larger map can't be contained.");

    let mut other: LightWeightMap<_, _> = [("a", 1), ("b", 5)].into_iter().collect();
    assert!(!merged.has_all(&other), "Values should be compared as well as keys.");
    other.set("b", 2);
    assert!(merged.has_all(&other));

    let custom: LightWeightMap<_, _, BadHasherBuilder> = [("a", 1)].into_iter().collect();
    assert!(merged.has_all(&custom), "Containment shouldn't depend on the hasher.");
}

#[test]
fn test_iteration() {
    let mut map: LightWeightMap<_, _> = (0..5).map(|i| (i, i * i)).collect();
    for value in map.values_mut() {
        *value += 1;
    }

    let mut order = ArrayList::new();
    map.for_each(|value, key, map| {
        assert_eq!(map.get(key), Some(value));
        order.add(*key);
    });
    assert_eq!(&*order, &[0, 1, 2, 3, 4]);

    assert_eq!(map.entries().rev().next(), Some((&4, &17)));
    assert_eq!(format!("{:?}", map.clone()), "{0: 1, 1: 2, 2: 5, 3: 10, 4: 17}");
    assert_eq!(&*map.into_iter().map(|(_, v)| v).collect::<ArrayList<_>>(), &[1, 2, 5, 10, 17]);
}
