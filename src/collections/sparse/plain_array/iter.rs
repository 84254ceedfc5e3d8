use std::iter::{Copied, FusedIterator};
use std::slice;

use super::PlainArray;
use crate::collections::contiguous::array;

impl<T> PlainArray<T> {
    /// Returns an iterator over `(key, &value)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            keys: self.keys.iter(),
            values: self.values.iter(),
        }
    }

    pub fn keys(&self) -> Copied<slice::Iter<'_, i64>> {
        self.keys.iter().copied()
    }

    pub fn values(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn values_mut(&mut self) -> slice::IterMut<'_, T> {
        self.values.iter_mut()
    }
}

impl<T> IntoIterator for PlainArray<T> {
    type Item = (i64, T);

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            keys: self.keys.into_iter(),
            values: self.values.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a PlainArray<T> {
    type Item = (i64, &'a T);

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed iterator over the entries of a [`PlainArray`].
pub struct Iter<'a, T> {
    pub(crate) keys: slice::Iter<'a, i64>,
    pub(crate) values: slice::Iter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            keys: self.keys.clone(),
            values: self.values.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (i64, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        Some((*self.keys.next()?, self.values.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        Some((*self.keys.next_back()?, self.values.next_back()?))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// An owned iterator over the entries of a [`PlainArray`].
pub struct IntoIter<T> {
    pub(crate) keys: array::IntoIter<i64>,
    pub(crate) values: array::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = (i64, T);

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.keys.next()?, self.values.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        Some((self.keys.next_back()?, self.values.next_back()?))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}
