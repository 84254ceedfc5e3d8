use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
use crate::collections::tree::map::{Comparator, NaturalOrder, TreeMap};
use crate::util::fmt::write_joined;

/// An ordered set of unique values, backed by a [`TreeMap`] with unit values. Values are kept in
/// the order given by the set's [`Comparator`].
pub struct TreeSet<T, C: Comparator<T> = NaturalOrder> {
    pub(crate) inner: TreeMap<T, (), C>,
}

impl<T: Ord> TreeSet<T> {
    pub const fn new() -> TreeSet<T> {
        TreeSet {
            inner: TreeMap::new(),
        }
    }
}

impl<T, C: Comparator<T>> TreeSet<T, C> {
    pub const fn with_comparator(comparator: C) -> TreeSet<T, C> {
        TreeSet {
            inner: TreeMap::with_comparator(comparator),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Adds `value` to the set. Returns false, leaving the set untouched, if an equal value is
    /// already present.
    pub fn add(&mut self, value: T) -> bool {
        if self.inner.has_key(&value) {
            return false;
        }
        self.inner.set(value, ());
        true
    }

    pub fn has(&self, value: &T) -> bool {
        self.inner.has_key(value)
    }

    /// Removes `value`, returning whether it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.inner.remove(value).is_some()
    }

    pub fn get_first_value(&self) -> Option<&T> {
        self.inner.get_first_key()
    }

    pub fn get_last_value(&self) -> Option<&T> {
        self.inner.get_last_key()
    }

    /// Returns the value directly before `value`, see [`TreeMap::get_lower_key`].
    pub fn get_lower_value(&self, value: &T) -> Option<&T> {
        self.inner.get_lower_key(value)
    }

    /// Returns the value directly after `value`, see [`TreeMap::get_higher_key`].
    pub fn get_higher_value(&self, value: &T) -> Option<&T> {
        self.inner.get_higher_key(value)
    }

    pub fn pop_first(&mut self) -> Option<T> {
        self.inner.pop_first().map(|(v, _)| v)
    }

    pub fn pop_last(&mut self) -> Option<T> {
        self.inner.pop_last().map(|(v, _)| v)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Calls `f` with every value twice over, as both the value and the key, and the set itself, in
    /// order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, &T, &Self),
    {
        for value in self.iter() {
            f(value, value, self);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.inner.keys())
    }

    /// An alias of [`iter`](TreeSet::iter).
    pub fn values(&self) -> Iter<'_, T> {
        self.iter()
    }
}

impl<T: Ord> Default for TreeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Extend<T> for TreeSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for TreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = TreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Clone for TreeSet<T, C> {
    fn clone(&self) -> Self {
        TreeSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq, C: Comparator<T>> PartialEq for TreeSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Debug, C: Comparator<T>> Debug for TreeSet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Writes the values in order, separated by commas.
impl<T: Display, C: Comparator<T>> Display for TreeSet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, self.iter())
    }
}
