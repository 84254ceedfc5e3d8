#![cfg(test)]

use std::cmp::Ordering;
use std::fmt::Debug;
use std::iter;

use super::*;
use crate::collections::contiguous::ArrayList;
use crate::util::alloc::CountedDrop;

/// Checks the red-black and search tree properties, as well as the parent links, of `map`.
fn check_invariants<K: Debug, V, C: Comparator<K>>(map: &TreeMap<K, V, C>) {
    assert!(!is_red(map.root), "The root should be black.");
    if let Some(root) = map.root {
        assert!(root.parent().is_none(), "The root shouldn't have a parent.");
    }

    let (count, _) = check_subtree(map.root);
    assert_eq!(count, map.len(), "The length should match the number of nodes.");

    let keys: ArrayList<_> = map.keys().collect();
    for pair in keys.windows(2) {
        assert_eq!(
            map.comparator.compare(pair[0], pair[1]),
            Ordering::Less,
            "Keys {:?} and {:?} should be in order.", pair[0], pair[1]
        );
    }
}

/// Returns the number of nodes and the black height of the subtree.
fn check_subtree<K, V>(link: Link<K, V>) -> (usize, usize) {
    let Some(node) = link else {
        return (0, 1);
    };

    for child in [node.left(), node.right()].into_iter().flatten() {
        assert!(child.parent() == Some(node), "Children should link back to their parent.");
    }
    if node.color().is_red() {
        assert!(!is_red(node.left()) && !is_red(node.right()), "A red node can't have red children.");
    }

    let (left_count, left_height) = check_subtree(node.left());
    let (right_count, right_height) = check_subtree(node.right());
    assert_eq!(left_height, right_height, "Every path should have the same black height.");

    (left_count + right_count + 1, left_height + node.color().is_black() as usize)
}

#[test]
fn test_navigation() {
    let mut map = TreeMap::new();
    for key in [5, 3, 8, 1, 4] {
        assert_eq!(map.set(key, key * 10), None);
    }
    check_invariants(&map);

    assert_eq!(map.get_first_key(), Some(&1));
    assert_eq!(map.get_last_key(), Some(&8));
    assert_eq!(map.get_lower_key(&5), Some(&4));
    assert_eq!(map.get_higher_key(&5), Some(&8));

    assert_eq!(map.get_lower_key(&4), Some(&3), "Neighbours should be found through parent links.");
    assert_eq!(map.get_higher_key(&4), Some(&5));
    assert_eq!(map.get_lower_key(&1), None, "The first key has no lower neighbour.");
    assert_eq!(map.get_higher_key(&8), None, "The last key has no higher neighbour.");

    assert_eq!(map.get_lower_key(&6), Some(&5), "Absent keys should find their nearest neighbours.");
    assert_eq!(map.get_higher_key(&6), Some(&8));
    assert_eq!(map.get_lower_key(&0), None);
    assert_eq!(map.get_higher_key(&9), None);

    assert_eq!(map.first_entry(), Some((&1, &10)));
    assert_eq!(map.last_entry(), Some((&8, &80)));

    let empty: TreeMap<u8, u8> = TreeMap::new();
    assert_eq!(empty.get_first_key(), None);
    assert_eq!(empty.get_lower_key(&3), None);
}

#[test]
fn test_set_get_remove() {
    let mut map = TreeMap::new();
    map.set("b", 2);
    map.set("a", 1);
    assert_eq!(map.set("b", 20), Some(2), "Setting an existing key should replace its value.");
    assert_eq!(map.len(), 2);

    assert_eq!(map.get(&"b"), Some(&20));
    assert_eq!(map.get_entry(&"a"), Some((&"a", &1)));
    assert!(map.has_key(&"a"));
    assert!(!map.has_key(&"c"));
    assert!(map.has_value(&20));
    assert!(!map.has_value(&2));

    assert!(map.replace(&"a", 10));
    assert!(!map.replace(&"c", 3), "Replace should only affect existing keys.");
    if let Some(value) = map.get_mut(&"a") {
        *value += 1;
    }

    assert_eq!(map.remove(&"a"), Some(11));
    assert_eq!(map.remove(&"a"), None);
    assert_eq!(map.remove_entry(&"b"), Some(("b", 20)));
    assert!(map.is_empty());
    check_invariants(&map);
}

#[test]
fn test_balancing() {
    let mut map = TreeMap::new();
    for i in 0..512 {
        map.set(i, ());
    }
    check_invariants(&map);

    // 7919 is odd, so this visits every residue modulo 512 once, out of order.
    for i in 0..512 {
        map.set(1000 + (i * 7919) % 512, ());
    }
    check_invariants(&map);
    assert_eq!(map.len(), 1024);

    for i in (0..512).step_by(3) {
        assert_eq!(map.remove(&i), Some(()));
        assert_eq!(map.remove(&(1000 + (i * 7919) % 512)), Some(()));
        if i % 60 == 0 {
            check_invariants(&map);
        }
    }
    check_invariants(&map);

    while let Some((key, _)) = map.pop_first() {
        if let Some((last, _)) = map.pop_last() {
            assert!(last > key);
        }
        check_invariants(&map);
    }
    assert!(map.is_empty());
}

#[test]
fn test_comparator() {
    let mut map = TreeMap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    map.set("ccc", 3);
    map.set("a", 1);
    map.set("bb", 2);
    assert_eq!(map.set("zz", 20), Some(2), "Keys that compare as equal should be the same key.");
    check_invariants(&map);

    assert_eq!(&*map.keys().copied().collect::<ArrayList<_>>(), &["a", "bb", "ccc"]);
    assert_eq!(map.get(&"xyz"), Some(&3));
    assert_eq!(map.get_higher_key(&"qq"), Some(&"ccc"));

    let mut reversed = TreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    reversed.extend((0..10).map(|i| (i, i)));
    check_invariants(&reversed);
    assert_eq!(reversed.get_first_key(), Some(&9));
    assert_eq!(reversed.get_lower_key(&5), Some(&6), "Lower should follow the comparator.");
}

#[test]
fn test_iteration() {
    let mut map: TreeMap<_, _> = [(3, 'c'), (1, 'a'), (2, 'b'), (5, 'e')].into_iter().collect();
    assert_eq!(&*map.keys().copied().collect::<ArrayList<_>>(), &[1, 2, 3, 5]);
    assert_eq!(&*map.values().rev().copied().collect::<ArrayList<_>>(), &['e', 'c', 'b', 'a']);
    assert_eq!(map.entries().len(), 4);

    let mut iter = map.iter();
    assert_eq!(iter.next(), Some((&1, &'a')));
    assert_eq!(iter.next_back(), Some((&5, &'e')));
    assert_eq!(iter.next(), Some((&2, &'b')));
    assert_eq!(iter.next_back(), Some((&3, &'c')));
    assert_eq!(iter.next(), None, "The cursors shouldn't cross.");
    assert_eq!(iter.next_back(), None);

    for value in map.values_mut() {
        *value = value.to_ascii_uppercase();
    }

    let mut seen = ArrayList::new();
    map.for_each(|value, key, map| {
        assert_eq!(map.get(key), Some(value));
        seen.add(*key);
    });
    assert_eq!(&*seen, &[1, 2, 3, 5]);

    assert_eq!(map.to_string(), "1:A,2:B,3:C,5:E");
    assert_eq!(format!("{map:?}"), "{1: 'A', 2: 'B', 3: 'C', 5: 'E'}");

    let mut owned = map.into_iter();
    assert_eq!(owned.next_back(), Some((5, 'E')));
    assert_eq!(owned.len(), 3);
    assert_eq!(&*owned.collect::<ArrayList<_>>(), &[(1, 'A'), (2, 'B'), (3, 'C')]);
}

#[test]
fn test_clone_and_drop() {
    let mut map: TreeMap<_, _> = (0..50).map(|i| (i, i.to_string())).collect();
    let cloned = map.clone();
    check_invariants(&cloned);
    assert_eq!(map, cloned);

    map.remove(&10);
    assert_ne!(map, cloned, "Clones should be independent.");
    assert_eq!(cloned.get(&10).map(String::as_str), Some("10"));

    let mut target = TreeMap::new();
    target.set(100, "100".to_string());
    target.set_all(&cloned);
    assert_eq!(target.len(), 51);
    check_invariants(&target);

    let counter = CountedDrop::new(0);
    let mut map: TreeMap<_, _> = iter::repeat_with(|| counter.clone()).take(20).enumerate().collect();
    drop(map.remove(&0));
    drop(map.pop_last());
    assert_eq!(*counter.borrow(), 2);

    map.clear();
    assert!(map.is_empty());
    assert_eq!(*counter.borrow(), 20, "Clearing should drop every value.");

    map.set(0, counter.clone());
    drop(map);
    assert_eq!(counter.take(), 21);
}

#[test]
fn test_nodes_freed_once() {
    let counter = CountedDrop::new(0);
    let mut map = TreeMap::new();
    for i in 0..300_usize {
        map.set((i * 151) % 300, (i, counter.clone()));
    }

    for key in (0..300).step_by(3) {
        let (index, _) = map.remove(&key).expect("Every key below 300 was inserted.");
        assert_eq!((index * 151) % 300, key);
    }
    assert_eq!(*counter.borrow(), 100);
    check_invariants(&map);

    for (index, _) in map.values_mut() {
        *index += 1000;
    }
    if let Some((index, _)) = map.get_mut(&1) {
        *index = 0;
    }
    assert_eq!(map.get(&1).map(|(index, _)| *index), Some(0));
    assert!(map.values().skip(1).all(|(index, _)| *index >= 1000));

    let cloned = map.clone();
    drop(map);
    assert_eq!(*counter.borrow(), 300, "Dropping a map should free each remaining node once.");
    assert_eq!(cloned.len(), 200);
    drop(cloned);
    assert_eq!(counter.take(), 500);
}
