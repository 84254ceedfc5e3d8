use std::iter::FusedIterator;

use super::TreeSet;
use crate::collections::tree::map::{self, Comparator, Keys};

impl<T, C: Comparator<T>> IntoIterator for TreeSet<T, C> {
    type Item = T;

    type IntoIter = IntoIter<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_iter())
    }
}

/// An owned iterator over the values of a [`TreeSet`], in order.
pub struct IntoIter<T, C: Comparator<T>>(
    pub(crate) map::IntoIter<T, (), C>,
);

impl<T, C: Comparator<T>> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(v, _)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T, C: Comparator<T>> DoubleEndedIterator for IntoIter<T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(v, _)| v)
    }
}

impl<T, C: Comparator<T>> FusedIterator for IntoIter<T, C> {}

impl<T, C: Comparator<T>> ExactSizeIterator for IntoIter<T, C> {}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a TreeSet<T, C> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed iterator over the values of a [`TreeSet`], in order.
pub struct Iter<'a, T>(
    pub(crate) Keys<'a, T, ()>,
);

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}
