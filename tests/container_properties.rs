//! Property tests for the containers, run with proptest against a std model of each one.

use std::collections::{BTreeMap, HashMap as StdHashMap};

use app_containers::collections::circ::Queue;
use app_containers::collections::contiguous::ArrayList;
use app_containers::collections::hash::{HashMap, HashSet};
use app_containers::collections::light_weight::LightWeightMap;
use app_containers::collections::sparse::PlainArray;
use app_containers::collections::traits::Map;
use app_containers::collections::tree::{TreeMap, TreeSet};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum ListOp {
    Insert(usize, i32),
    Remove(usize),
}

fn list_ops() -> impl Strategy<Value = Vec<ListOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| ListOp::Insert(i, v)),
            1 => any::<usize>().prop_map(ListOp::Remove),
        ],
        0..200,
    )
}

#[derive(Debug, Clone)]
enum MapOp {
    Set(i64, i32),
    Remove(i64),
    Clear,
}

/// Keys are drawn from a small range so that overwrites and removals of present keys are common.
fn map_ops() -> impl Strategy<Value = Vec<MapOp>> {
    prop::collection::vec(
        prop_oneof![
            8 => (0..48_i64, any::<i32>()).prop_map(|(k, v)| MapOp::Set(k, v)),
            4 => (0..48_i64).prop_map(MapOp::Remove),
            1 => Just(MapOp::Clear),
        ],
        0..300,
    )
}

/// Applies `ops` to both `map` and a BTreeMap, checking that every observable result agrees.
fn check_against_model<M: Map<i64, i32>>(mut map: M, ops: &[MapOp]) -> Result<(), TestCaseError> {
    let mut model = BTreeMap::new();
    for op in ops {
        match *op {
            MapOp::Set(key, value) => {
                prop_assert_eq!(map.set(key, value), model.insert(key, value));
                prop_assert_eq!(map.get(&key), Some(&value));
            },
            MapOp::Remove(key) => {
                prop_assert_eq!(map.remove(&key), model.remove(&key));
                prop_assert!(!map.has_key(&key));
            },
            MapOp::Clear => {
                map.clear();
                model.clear();
            },
        }
        prop_assert_eq!(map.len(), model.len());
    }
    for (key, value) in model.iter() {
        prop_assert_eq!(map.get(key), Some(value));
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_array_list_matches_model(ops in list_ops()) {
        let mut list = ArrayList::new();
        let mut model = Vec::new();
        for op in ops {
            match op {
                ListOp::Insert(index, value) => {
                    let index = index % (model.len() + 1);
                    list.insert(index, value);
                    model.insert(index, value);
                },
                ListOp::Remove(index) => {
                    if model.is_empty() {
                        prop_assert!(list.try_remove_by_index(index).is_err());
                    } else {
                        let index = index % model.len();
                        prop_assert_eq!(list.remove_by_index(index), model.remove(index));
                    }
                },
            }
            prop_assert_eq!(list.len(), model.len());
        }
        prop_assert_eq!(&*list.convert_to_array(), &model[..]);
    }

    #[test]
    fn prop_queue_is_fifo(values in prop::collection::vec(any::<u16>(), 0..100), pops in 0..100_usize) {
        let mut queue = Queue::new();
        let mut last_cap = queue.cap();
        for &value in &values {
            queue.add(value);
            prop_assert!(queue.cap() >= last_cap, "Capacity should only ever grow.");
            last_cap = queue.cap();
        }

        let pops = pops.min(values.len());
        for &expected in &values[..pops] {
            prop_assert_eq!(queue.pop(), Some(expected));
        }
        prop_assert_eq!(queue.len(), values.len() - pops);
        prop_assert_eq!(queue.get_first(), values.get(pops));
        prop_assert_eq!(queue.cap(), last_cap);
    }

    #[test]
    fn prop_plain_array_keys_ascend(entries in prop::collection::vec((any::<i64>(), any::<u8>()), 0..100)) {
        let mut array = PlainArray::new();
        for (key, value) in entries {
            array.add(key, value);
            prop_assert_eq!(array.get(key), Some(&value));

            let keys: Vec<i64> = array.keys().collect();
            prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn prop_hash_map_matches_model(ops in map_ops()) {
        check_against_model(HashMap::<_, _>::new(), &ops)?;
    }

    #[test]
    fn prop_light_weight_map_matches_model(ops in map_ops()) {
        check_against_model(LightWeightMap::<_, _>::new(), &ops)?;
    }

    #[test]
    fn prop_tree_map_matches_model(ops in map_ops()) {
        check_against_model(TreeMap::new(), &ops)?;
    }

    #[test]
    fn prop_plain_array_matches_model(ops in map_ops()) {
        check_against_model(PlainArray::new(), &ops)?;
    }

    #[test]
    fn prop_std_map_matches_model(ops in map_ops()) {
        check_against_model(StdHashMap::new(), &ops)?;
    }

    #[test]
    fn prop_hash_set_add_is_idempotent(values in prop::collection::vec(0..64_u32, 0..100)) {
        let mut set = HashSet::<_>::new();
        for value in values {
            let len = set.len();
            let added = set.add(value);
            prop_assert_eq!(set.len(), len + added as usize);
            prop_assert!(!set.add(value));
            prop_assert_eq!(set.len(), len + added as usize);
            prop_assert!(set.has(&value));
        }
    }

    #[test]
    fn prop_hash_set_remove(values in prop::collection::vec(0..64_u32, 1..100)) {
        let mut set: HashSet<_> = values.iter().copied().collect();
        for value in &values {
            set.remove(value);
            prop_assert!(!set.has(value));
        }
        prop_assert!(set.is_empty());
    }

    #[test]
    fn prop_tree_map_is_sorted(keys in prop::collection::vec(any::<i32>(), 0..200)) {
        let map: TreeMap<_, _> = keys.iter().map(|&k| (k, ())).collect();
        let ordered: Vec<i32> = map.keys().copied().collect();
        prop_assert!(ordered.windows(2).all(|pair| pair[0] < pair[1]));

        prop_assert_eq!(map.get_first_key(), keys.iter().min());
        prop_assert_eq!(map.get_last_key(), keys.iter().max());

        let set: TreeSet<_> = keys.iter().copied().collect();
        prop_assert_eq!(set.len(), map.len());
        prop_assert!(set.iter().eq(ordered.iter()));
    }
}
