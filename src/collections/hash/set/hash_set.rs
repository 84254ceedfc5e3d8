use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::Iter;
use crate::collections::hash::HashMap;
use crate::util::fmt::DebugList;
use crate::util::option::OptionExtension;

/// A set of unique values, backed by a [`HashMap`] with unit values. Every value acts as both key
/// and value, so iteration over entries yields each value twice.
///
/// The capacity, load factor and growth behaviour are identical to HashMap's.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    // The unit type makes every value slot a no-op.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    pub fn new() -> HashSet<T, B> {
        HashSet {
            inner: HashMap::new(),
        }
    }

    pub fn with_cap(cap: usize) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_cap(cap),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_cap_and_hasher(cap, hasher),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Adds `value` to the set. Returns false, leaving the set untouched, if an equal value is
    /// already present.
    ///
    /// # Examples
    /// ```
    /// # use app_containers::collections::hash::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert!(set.add(4));
    /// assert!(!set.add(4));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        if self.inner.should_grow() {
            self.inner.grow()
        }

        // UNREACHABLE: We've just grown if necessary.
        let index = unsafe { self.inner.find_index_for_key(&value).unreachable() };

        // The bucket at index is either empty or contains an equal value.
        match &self.inner.arr[index] {
            Some(_) => false,
            None => {
                self.inner.arr[index] = Some((value, ()));
                self.inner.len += 1;
                true
            },
        }
    }

    /// Returns true if the set contains a value equal to `value`.
    pub fn has<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.has_key(value)
    }

    /// Removes the value equal to `value`, returning whether it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the stored value equal to `value`.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(value).map(|(v, _)| v)
    }

    /// Removes every value, keeping the current capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Calls `f` with every value twice over, as both the value and the key, and the set itself.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, &T, &Self),
    {
        for value in self.iter() {
            f(value, value, self);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// An alias of [`iter`](HashSet::iter).
    pub fn values(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Returns an iterator over `(value, value)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.iter().map(|value| (value, value))
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = HashSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugList(self.iter()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", &self.inner.hasher)
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}
