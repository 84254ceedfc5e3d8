use std::collections::{BTreeMap, HashMap as StdHashMap};
use std::hash::{BuildHasher, Hash};

/// A keyed container holding at most one value per key.
///
/// Implemented for every map in this crate as well as [`std`]'s HashMap and BTreeMap.
pub trait Map<K, V> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Associates `value` with `key`, returning the value it replaced, if any.
    fn set(&mut self, key: K, value: V) -> Option<V>;

    fn get(&self, key: &K) -> Option<&V>;

    fn has_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    fn remove(&mut self, key: &K) -> Option<V>;

    fn clear(&mut self);

    /// Sets every entry yielded by `entries`, later entries overwriting earlier ones.
    fn set_each<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I)
    where
        Self: Sized,
    {
        for (key, value) in entries {
            self.set(key, value);
        }
    }
}

#[cfg(feature = "hash")]
impl<K: Hash + Eq, V, B: BuildHasher> Map<K, V> for crate::collections::hash::HashMap<K, V, B> {
    fn len(&self) -> usize {
        self.len()
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.set(key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn has_key(&self, key: &K) -> bool {
        self.has_key(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn clear(&mut self) {
        self.clear()
    }
}

#[cfg(feature = "light-weight")]
impl<K: Hash + Eq, V, B: BuildHasher> Map<K, V>
    for crate::collections::light_weight::LightWeightMap<K, V, B>
{
    fn len(&self) -> usize {
        self.len()
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.set(key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn has_key(&self, key: &K) -> bool {
        self.has_key(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn clear(&mut self) {
        self.clear()
    }
}

#[cfg(feature = "tree")]
impl<K, V, C> Map<K, V> for crate::collections::tree::TreeMap<K, V, C>
where
    C: crate::collections::tree::Comparator<K>,
{
    fn len(&self) -> usize {
        self.len()
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.set(key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn has_key(&self, key: &K) -> bool {
        self.has_key(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn clear(&mut self) {
        self.clear()
    }
}

#[cfg(feature = "sparse")]
impl<V> Map<i64, V> for crate::collections::sparse::PlainArray<V> {
    fn len(&self) -> usize {
        self.len()
    }

    fn set(&mut self, key: i64, value: V) -> Option<V> {
        self.add(key, value)
    }

    fn get(&self, key: &i64) -> Option<&V> {
        self.get(*key)
    }

    fn has_key(&self, key: &i64) -> bool {
        self.has(*key)
    }

    fn remove(&mut self, key: &i64) -> Option<V> {
        self.remove(*key)
    }

    fn clear(&mut self) {
        self.clear()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Map<K, V> for StdHashMap<K, V, S> {
    fn len(&self) -> usize {
        self.len()
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn clear(&mut self) {
        self.clear()
    }
}

impl<K: Ord, V> Map<K, V> for BTreeMap<K, V> {
    fn len(&self) -> usize {
        self.len()
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }

    fn clear(&mut self) {
        self.clear()
    }
}
