#![cfg(all(test, feature = "collections-all"))]

use std::collections::{BTreeMap, BTreeSet, HashMap as StdHashMap, HashSet as StdHashSet};

use super::*;
use crate::collections::contiguous::ArrayList;
use crate::collections::hash::{HashMap, HashSet};
use crate::collections::light_weight::LightWeightMap;
use crate::collections::sparse::PlainArray;
use crate::collections::tree::{TreeMap, TreeSet};

fn exercise_map<M: Map<i64, &'static str>>(mut map: M) {
    assert!(map.is_empty());
    assert_eq!(map.set(3, "three"), None);
    assert_eq!(map.set(1, "one"), None);
    assert_eq!(map.set(3, "THREE"), Some("three"), "Overwriting should return the old value.");
    assert_eq!(map.len(), 2);

    assert_eq!(map.get(&3), Some(&"THREE"));
    assert!(map.has_key(&1));
    assert!(!map.has_key(&2));

    assert_eq!(map.remove(&1), Some("one"));
    assert_eq!(map.remove(&1), None);
    assert_eq!(map.len(), 1);

    map.set_each([(7, "seven"), (8, "eight"), (7, "SEVEN")]);
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&7), Some(&"SEVEN"));

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.get(&3), None);
}

#[test]
fn test_map_backends() {
    exercise_map(HashMap::<_, _>::new());
    exercise_map(LightWeightMap::<_, _>::new());
    exercise_map(TreeMap::new());
    exercise_map(PlainArray::new());
    exercise_map(StdHashMap::new());
    exercise_map(BTreeMap::new());
}

fn exercise_set<S: Set<u32> + FromIterator<u32>>() {
    let mut a: S = (1..=5).collect();
    let b: S = (4..=8).collect();

    assert!(!a.add(3), "Adding a present value should be rejected.");
    assert!(a.add(0));
    assert!(a.remove(&0));
    assert!(!a.has(&0));
    assert_eq!(a.len(), 5);

    let mut difference: ArrayList<_> = a.difference(&b).copied().collect();
    difference.sort();
    assert_eq!(&*difference, &[1, 2, 3]);

    let mut intersection: ArrayList<_> = a.intersection(&b).copied().collect();
    intersection.sort();
    assert_eq!(&*intersection, &[4, 5]);

    let mut symmetric: ArrayList<_> = a.symmetric_difference(&b).copied().collect();
    symmetric.sort();
    assert_eq!(&*symmetric, &[1, 2, 3, 6, 7, 8]);

    assert_eq!(a.union(&b).count(), 8);

    let small: S = (2..=3).collect();
    assert!(small.is_subset(&a));
    assert!(a.is_superset(&small));
    assert!(!a.is_subset(&small));

    let mut owned: ArrayList<_> = a.into_intersection(b).collect();
    owned.sort();
    assert_eq!(&*owned, &[4, 5]);

    let c: S = (1..=3).collect();
    let d: S = (2..=9).collect();
    assert_eq!(&*c.into_difference(d).collect::<ArrayList<_>>(), &[1]);
}

#[test]
fn test_set_backends() {
    exercise_set::<HashSet<u32>>();
    exercise_set::<TreeSet<u32>>();
    exercise_set::<StdHashSet<u32>>();
    exercise_set::<BTreeSet<u32>>();
}
