use std::iter::FusedIterator;

use super::Queue;

impl<T> Queue<T> {
    /// Returns an iterator over the elements of the Queue, from front to rear.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            start: 0,
            end: self.len(),
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            queue: self,
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed iterator over a [`Queue`], yielding elements in the order they will be popped.
pub struct Iter<'a, T> {
    pub(crate) queue: &'a Queue<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            queue: self.queue,
            start: self.start,
            end: self.end,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.end {
            return None;
        }

        let slot = self.queue.slot(self.start);
        self.start += 1;
        self.queue.buf[slot].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start >= self.end {
            return None;
        }

        self.end -= 1;
        self.queue.buf[self.queue.slot(self.end)].as_ref()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// An owned iterator over a [`Queue`], popping each element in turn.
pub struct IntoIter<T> {
    pub(crate) queue: Queue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}
