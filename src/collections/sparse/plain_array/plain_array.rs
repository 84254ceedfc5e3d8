use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::contiguous::ArrayList;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::write_pairs;
use crate::util::result::ResultExtension;

/// A map from integer keys to values, stored as two index-aligned [`ArrayList`]s. The keys are
/// kept strictly ascending, so every keyed lookup is a binary search and iteration always happens
/// in key order.
///
/// Positional methods (`*_at`) address entries by their rank among the keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the PlainArray.
/// - `i`: The index of the entry in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(log n)` |
/// | `has` | `O(log n)` |
/// | `add` | `O(log n)`*, `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `get_key_at` | `O(1)` |
/// | `get_index_of_value` | `O(n)` |
///
/// \* Overwriting the value of an existing key doesn't move any entries.
pub struct PlainArray<T> {
    pub(crate) keys: ArrayList<i64>,
    pub(crate) values: ArrayList<T>,
}

impl<T> PlainArray<T> {
    /// Creates a new, empty PlainArray.
    pub fn new() -> PlainArray<T> {
        PlainArray {
            keys: ArrayList::new(),
            values: ArrayList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.keys.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Removes every entry, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    /// Associates `value` with `key`, inserting the entry at the position that keeps the keys
    /// sorted. If the key is already present, its value is replaced and the previous value is
    /// returned.
    ///
    /// # Examples
    /// ```
    /// # use app_containers::collections::contiguous::ArrayList;
    /// # use app_containers::collections::sparse::PlainArray;
    /// let mut arr = PlainArray::new();
    /// arr.add(5, 'a');
    /// arr.add(1, 'b');
    /// arr.add(3, 'c');
    /// assert_eq!(&*arr.keys().collect::<ArrayList<_>>(), &[1, 3, 5]);
    /// assert_eq!(arr.get(3), Some(&'c'));
    /// assert_eq!(arr.get_index_of_key(5), Some(2));
    /// ```
    pub fn add(&mut self, key: i64, value: T) -> Option<T> {
        match self.keys.binary_search(&key) {
            Ok(index) => Some(self.values.set(index, value)),
            Err(index) => {
                self.keys.insert(index, key);
                self.values.insert(index, value);
                None
            },
        }
    }

    /// Returns a reference to the value associated with `key`.
    pub fn get(&self, key: i64) -> Option<&T> {
        let index = self.get_index_of_key(key)?;
        Some(&self.values[index])
    }

    pub fn get_mut(&mut self, key: i64) -> Option<&mut T> {
        let index = self.get_index_of_key(key)?;
        Some(&mut self.values[index])
    }

    pub fn has(&self, key: i64) -> bool {
        self.get_index_of_key(key).is_some()
    }

    /// Returns the position of `key` among the sorted keys, found by binary search.
    pub fn get_index_of_key(&self, key: i64) -> Option<usize> {
        self.keys.binary_search(&key).ok()
    }

    /// Returns the position of the first entry with a value equal to `value`.
    pub fn get_index_of_value(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.values.get_index_of(value)
    }

    /// Removes the entry for `key`, returning its value if it was present.
    pub fn remove(&mut self, key: i64) -> Option<T> {
        let index = self.get_index_of_key(key)?;
        self.keys.remove_by_index(index);
        Some(self.values.remove_by_index(index))
    }

    /// Removes the entry at `index`, returning its value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.len())?;
        self.keys.remove_by_index(index);
        Ok(self.values.remove_by_index(index))
    }

    /// Removes up to `size` entries starting at `index`, returning the number actually removed.
    /// `size` is clamped so that nothing past the last entry is touched.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use app_containers::collections::sparse::PlainArray;
    /// let mut arr: PlainArray<_> = (0..5).map(|i| (i * 10, i)).collect();
    /// assert_eq!(arr.remove_range_from(3, 10), 2);
    /// assert_eq!(arr.len(), 3);
    /// ```
    pub fn remove_range_from(&mut self, index: usize, size: usize) -> usize {
        self.try_remove_range_from(index, size).throw()
    }

    pub fn try_remove_range_from(&mut self, index: usize, size: usize) -> Result<usize, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.len())?;

        let count = cmp::min(size, self.len() - index);
        if count != 0 {
            self.keys.remove_by_range(index, index + count);
            self.values.remove_by_range(index, index + count);
        }
        Ok(count)
    }

    /// Returns the key at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_key_at(&self, index: usize) -> i64 {
        self.try_get_key_at(index).throw()
    }

    pub fn try_get_key_at(&self, index: usize) -> Result<i64, IndexOutOfBounds> {
        self.keys.try_get(index).copied()
    }

    /// Returns a reference to the value at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_value_at(&self, index: usize) -> &T {
        self.try_get_value_at(index).throw()
    }

    pub fn try_get_value_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.values.try_get(index)
    }

    /// Replaces the value at `index`, returning the previous one. The key is left untouched.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set_value_at(&mut self, index: usize, value: T) -> T {
        self.try_set_value_at(index, value).throw()
    }

    pub fn try_set_value_at(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        self.values.try_set(index, value)
    }

    /// Calls `f` with every value, its key and the PlainArray itself, in ascending key order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, i64, &Self),
    {
        for (key, value) in self.iter() {
            f(value, key, self);
        }
    }
}

impl<T> Default for PlainArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<(i64, T)> for PlainArray<T> {
    fn extend<I: IntoIterator<Item = (i64, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<T> FromIterator<(i64, T)> for PlainArray<T> {
    fn from_iter<I: IntoIterator<Item = (i64, T)>>(iter: I) -> Self {
        let mut arr = PlainArray::new();
        arr.extend(iter);
        arr
    }
}

impl<T: Clone> Clone for PlainArray<T> {
    fn clone(&self) -> Self {
        PlainArray {
            keys: self.keys.clone(),
            values: self.values.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for PlainArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl<T: Eq> Eq for PlainArray<T> {}

impl<T: Debug> Debug for PlainArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Writes the entries as `key:value` pairs separated by commas, e.g. `1:a,3:c`.
impl<T: Display> Display for PlainArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_pairs(f, self.iter())
    }
}
