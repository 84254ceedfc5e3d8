use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use crate::collections::contiguous::ArrayList;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::write_pairs;
use crate::util::result::ResultExtension;

const BASELINE_CAP: usize = 8;

/// A map stored as three index-aligned [`ArrayList`]s of hashes, keys and values, in the order
/// that keys were first set.
///
/// Lookups scan the cached hashes and only compare keys whose hashes match, which is cheap for the
/// small maps this type is meant for. Entries can also be addressed by position.
///
/// The capacity starts at 8 and doubles whenever a new key is set on a full map. Clearing a map
/// that has grown returns it to the baseline capacity.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the LightWeightMap.
/// - `i`: The index of the entry in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `set` | `O(n)` |
/// | `get` | `O(n)` |
/// | `get_key_at` | `O(1)` |
/// | `remove_at` | `O(n-i)` |
/// | `has_all` | `O(n*m)` |
pub struct LightWeightMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) hashes: ArrayList<u64>,
    pub(crate) keys: ArrayList<K>,
    pub(crate) values: ArrayList<V>,
    pub(crate) hasher: B,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> LightWeightMap<K, V, B> {
    /// Creates a new, empty LightWeightMap with the baseline capacity of 8.
    pub fn new() -> LightWeightMap<K, V, B> {
        LightWeightMap::with_hasher(B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> LightWeightMap<K, V, B> {
    pub fn with_hasher(hasher: B) -> LightWeightMap<K, V, B> {
        LightWeightMap {
            hashes: ArrayList::with_cap(BASELINE_CAP),
            keys: ArrayList::with_cap(BASELINE_CAP),
            values: ArrayList::with_cap(BASELINE_CAP),
            hasher,
        }
    }

    pub const fn len(&self) -> usize {
        self.keys.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the current capacity, which is shared by all three backing lists.
    pub const fn cap(&self) -> usize {
        self.keys.cap()
    }

    /// Associates `value` with `key`. An existing key keeps its position and has its value
    /// replaced, with the previous value returned. A new key is appended after every existing one.
    ///
    /// # Examples
    /// ```
    /// # use app_containers::collections::light_weight::LightWeightMap;
    /// let mut map: LightWeightMap<_, _> = LightWeightMap::new();
    /// map.set("b", 1);
    /// map.set("a", 2);
    /// assert_eq!(map.set("b", 3), Some(1));
    /// assert_eq!(map.to_string(), "b:3,a:2");
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hasher.hash_one(&key);
        if let Some(index) = self.find_index(hash, &key) {
            return Some(self.values.set(index, value));
        }

        if self.len() == self.cap() {
            self.increase_capacity_to(self.cap() * 2);
        }

        self.hashes.add(hash);
        self.keys.add(key);
        self.values.add(value);
        None
    }

    /// Sets every entry of `other` on this map, cloning each key and value. If this map is empty,
    /// the backing lists are copied wholesale, otherwise entries are merged one at a time.
    pub fn set_all<C: BuildHasher>(&mut self, other: &LightWeightMap<K, V, C>)
    where
        K: Clone,
        V: Clone,
    {
        if !self.is_empty() {
            for (key, value) in other.iter() {
                self.set(key.clone(), value.clone());
            }
            return;
        }

        // Hashes depend on the hasher, so they are recomputed rather than copied.
        let mut hashes = ArrayList::with_cap(other.cap());
        for key in other.keys.iter() {
            hashes.add(self.hasher.hash_one(key));
        }

        self.hashes = hashes;
        self.keys = other.keys.clone();
        self.values = other.values.clone();
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.get_index_of_key(key)?;
        Some(&self.values[index])
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.get_index_of_key(key)?;
        Some(&mut self.values[index])
    }

    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_index_of_key(key).is_some()
    }

    pub fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values.has(value)
    }

    /// Returns true if every entry of `other` is also an entry of this map, with an equal value.
    /// A larger `other` can never be contained.
    pub fn has_all<C: BuildHasher>(&self, other: &LightWeightMap<K, V, C>) -> bool
    where
        V: PartialEq,
    {
        other.len() <= self.len()
            && other.iter().all(|(key, value)| self.get(key) == Some(value))
    }

    /// Returns the position of `key` in insertion order.
    pub fn get_index_of_key<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_index(self.hasher.hash_one(key), key)
    }

    /// Returns the position of the first entry with a value equal to `value`.
    pub fn get_index_of_value(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.values.get_index_of(value)
    }

    /// Returns a reference to the key at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_key_at(&self, index: usize) -> &K {
        self.try_get_key_at(index).throw()
    }

    pub fn try_get_key_at(&self, index: usize) -> Result<&K, IndexOutOfBounds> {
        self.keys.try_get(index)
    }

    /// Returns a reference to the value at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_value_at(&self, index: usize) -> &V {
        self.try_get_value_at(index).throw()
    }

    pub fn try_get_value_at(&self, index: usize) -> Result<&V, IndexOutOfBounds> {
        self.values.try_get(index)
    }

    /// Replaces the value at `index`. Returns false without changing anything if there is no entry
    /// at `index`.
    pub fn set_value_at(&mut self, index: usize, value: V) -> bool {
        self.values.try_set(index, value).is_ok()
    }

    /// Removes the entry at `index` from all three backing lists, returning its key and value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> (K, V) {
        self.try_remove_at(index).throw()
    }

    pub fn try_remove_at(&mut self, index: usize) -> Result<(K, V), IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.len())?;

        self.hashes.remove_by_index(index);
        Ok((self.keys.remove_by_index(index), self.values.remove_by_index(index)))
    }

    /// Removes the entry for `key`, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.get_index_of_key(key)?;
        Some(self.remove_at(index).1)
    }

    /// Removes every entry. If the map has grown past the baseline capacity of 8, the backing lists
    /// are reallocated at the baseline.
    pub fn clear(&mut self) {
        if self.cap() > BASELINE_CAP {
            self.hashes = ArrayList::with_cap(BASELINE_CAP);
            self.keys = ArrayList::with_cap(BASELINE_CAP);
            self.values = ArrayList::with_cap(BASELINE_CAP);
        } else {
            self.hashes.clear();
            self.keys.clear();
            self.values.clear();
        }
    }

    /// Raises the capacity of all three backing lists to `new_cap`. Lower values are ignored, and
    /// the length is never affected.
    pub fn increase_capacity_to(&mut self, new_cap: usize) {
        self.hashes.increase_capacity_to(new_cap);
        self.keys.increase_capacity_to(new_cap);
        self.values.increase_capacity_to(new_cap);
    }

    /// Calls `f` with every value, its key and the map itself, in insertion order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &K, &Self),
    {
        for (key, value) in self.iter() {
            f(value, key, self);
        }
    }

    fn find_index<Q>(&self, hash: u64, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.hashes.iter()
            .enumerate()
            .find(|(index, h)| **h == hash && self.keys[*index].borrow() == key)
            .map(|(index, _)| index)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for LightWeightMap<K, V, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for LightWeightMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for LightWeightMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = LightWeightMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for LightWeightMap<K, V, B> {
    fn clone(&self) -> Self {
        LightWeightMap {
            hashes: self.hashes.clone(),
            keys: self.keys.clone(),
            values: self.values.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

/// Two maps are equal if they contain the same entries, regardless of their order.
impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for LightWeightMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.has_all(other)
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for LightWeightMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Writes the entries as `key:value` pairs separated by commas, in insertion order.
impl<K: Hash + Eq + Display, V: Display, B: BuildHasher> Display for LightWeightMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_pairs(f, self.iter())
    }
}
