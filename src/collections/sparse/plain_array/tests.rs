#![cfg(test)]

use super::*;
use crate::collections::contiguous::ArrayList;
use crate::util::panic::assert_panics;

#[test]
fn test_sorted_insertion() {
    let mut arr = PlainArray::new();
    assert_eq!(arr.add(5, 'a'), None);
    assert_eq!(arr.add(1, 'b'), None);
    assert_eq!(arr.add(3, 'c'), None);

    assert_eq!(&*arr.keys().collect::<ArrayList<_>>(), &[1, 3, 5], "Keys should stay sorted.");
    assert_eq!(arr.get(3), Some(&'c'));
    assert_eq!(arr.get_index_of_key(5), Some(2));
    assert_eq!(arr.get_index_of_key(4), None);
    assert!(arr.has(1));
    assert!(!arr.has(2));

    assert_eq!(arr.add(3, 'z'), Some('c'), "Adding an existing key should overwrite its value.");
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.to_string(), "1:b,3:z,5:a");

    arr.add(-7, 'n');
    assert_eq!(arr.get_key_at(0), -7, "Negative keys should sort before positive ones.");
    assert_eq!(arr.get_index_of_value(&'a'), Some(3));
    assert_eq!(arr.get_index_of_value(&'q'), None);
}

#[test]
fn test_removal() {
    let mut arr: PlainArray<_> = (0..6).map(|i| (i * 2, i)).collect();
    assert_eq!(arr.remove(4), Some(2));
    assert_eq!(arr.remove(4), None);
    assert_eq!(arr.len(), 5);

    assert_eq!(arr.remove_at(0), 0);
    assert_eq!(arr.try_remove_at(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(&*arr.keys().collect::<ArrayList<_>>(), &[2, 6, 8, 10]);

    assert_eq!(arr.remove_range_from(1, 2), 2);
    assert_eq!(&*arr.keys().collect::<ArrayList<_>>(), &[2, 10]);
    assert_eq!(arr.remove_range_from(1, 100), 1, "The removed size should be clamped to the end.");
    assert_eq!(arr.remove_range_from(0, 0), 0);
    assert_eq!(arr.len(), 1);
    assert_eq!(arr.try_remove_range_from(1, 1), Err(IndexOutOfBounds { index: 1, len: 1 }));

    arr.clear();
    assert!(arr.is_empty());
    assert_panics!({
        let mut arr: PlainArray<u8> = PlainArray::new();
        arr.remove_at(0);
    });
}

#[test]
fn test_positional_access() {
    let mut arr: PlainArray<_> = [(10, "ten"), (20, "twenty")].into_iter().collect();
    assert_eq!(arr.get_key_at(1), 20);
    assert_eq!(*arr.get_value_at(0), "ten");
    assert_eq!(arr.set_value_at(0, "TEN"), "ten");
    assert_eq!(arr.get(10), Some(&"TEN"), "Setting a value by position should keep its key.");

    assert_eq!(arr.try_get_key_at(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert!(arr.try_get_value_at(2).is_err());
    assert!(arr.try_set_value_at(2, "x").is_err());
    assert_panics!({
        let arr: PlainArray<u8> = PlainArray::new();
        arr.get_key_at(0);
    });

    if let Some(value) = arr.get_mut(20) {
        *value = "TWENTY";
    }
    assert_eq!(arr.values().copied().collect::<ArrayList<_>>().to_string(), "TEN,TWENTY");
}

#[test]
fn test_iteration_and_clone() {
    let arr: PlainArray<_> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    let cloned = arr.clone();
    assert_eq!(arr, cloned);

    let mut keys = ArrayList::new();
    arr.for_each(|value, key, arr| {
        assert_eq!(arr.get(key), Some(value));
        keys.add(key);
    });
    assert_eq!(&*keys, &[1, 2, 3], "for_each should visit entries in key order.");

    assert_eq!(arr.iter().rev().next(), Some((3, &'c')));
    assert_eq!(format!("{arr:?}"), "{1: 'a', 2: 'b', 3: 'c'}");

    let owned: ArrayList<_> = cloned.into_iter().collect();
    assert_eq!(&*owned, &[(1, 'a'), (2, 'b'), (3, 'c')]);
}
