use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::contiguous::Array;
use crate::util::error::CapacityOverflow;
use crate::util::fmt::{DebugList, write_joined};
use crate::util::result::ResultExtension;

const DEFAULT_CAP: usize = 8;

/// A first-in first-out queue stored in a circular buffer.
///
/// The buffer holds `cap + 1` slots, with `front` pointing at the oldest element and `rear` at the
/// next free slot, so that the queue is empty when `front == rear` and full when its length equals
/// `cap`. Adding to a full queue doubles the capacity first, so `add` never fails. The capacity
/// never shrinks.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `get_first` | `O(1)` |
/// | `for_each` | `O(n)` |
///
/// \* If the Queue is full, `add` has to move every element into a larger buffer first.
pub struct Queue<T> {
    pub(crate) buf: Array<Option<T>>,
    pub(crate) front: usize,
    pub(crate) rear: usize,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue with the default capacity of 8.
    ///
    /// # Examples
    /// ```
    /// # use app_containers::collections::circ::Queue;
    /// let queue: Queue<u8> = Queue::new();
    /// assert_eq!(queue.cap(), 8);
    /// assert!(queue.is_empty());
    /// ```
    pub fn new() -> Queue<T> {
        Queue::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty Queue which can hold `cap` elements before growing.
    ///
    /// # Panics
    /// Panics with [`CapacityOverflow`] if `cap + 1` slots would overflow or exceed the maximum
    /// layout size.
    pub fn with_cap(cap: usize) -> Queue<T> {
        Queue {
            buf: Array::repeat_default(cap.checked_add(1).ok_or(CapacityOverflow).throw()),
            front: 0,
            rear: 0,
        }
    }

    /// Returns the number of elements currently in the Queue.
    pub const fn len(&self) -> usize {
        (self.rear + self.buf.size() - self.front) % self.buf.size()
    }

    pub const fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    /// Returns the number of elements that the Queue can hold before it has to grow.
    pub const fn cap(&self) -> usize {
        self.buf.size() - 1
    }

    /// Adds `value` to the rear of the Queue, doubling the capacity first if the Queue is full.
    /// Always returns true.
    ///
    /// # Examples
    /// ```
    /// # use app_containers::collections::circ::Queue;
    /// let mut queue = Queue::new();
    /// for i in 0..=8 {
    ///     queue.add(i);
    /// }
    /// assert_eq!(queue.cap(), 16);
    /// assert_eq!(queue.pop(), Some(0));
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        if self.len() == self.cap() {
            self.grow();
        }

        self.buf[self.rear] = Some(value);
        self.rear = (self.rear + 1) % self.buf.size();
        true
    }

    /// Removes and returns the oldest element in the Queue, or None if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.buf[self.front].take();
        self.front = (self.front + 1) % self.buf.size();
        value
    }

    /// Returns a reference to the oldest element without removing it.
    pub fn get_first(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        self.buf[self.front].as_ref()
    }

    /// Calls `f` with every element, its position counted from the front and the Queue itself, from
    /// the oldest element to the newest.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize, &Self),
    {
        for (index, value) in self.iter().enumerate() {
            f(value, index, self);
        }
    }

    /// Removes every element, keeping the current capacity.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
        self.front = 0;
        self.rear = 0;
    }

    /// Returns the slot holding the element `offset` places behind the front.
    pub(crate) const fn slot(&self, offset: usize) -> usize {
        (self.front + offset) % self.buf.size()
    }

    fn grow(&mut self) {
        let new_cap = usize::max(self.cap() * 2, 1);
        let len = self.len();

        let mut new_buf: Array<Option<T>> = Array::repeat_default(new_cap + 1);
        for (offset, slot) in new_buf.iter_mut().enumerate().take(len) {
            let old = self.slot(offset);
            *slot = self.buf[old].take();
        }

        self.buf = new_buf;
        self.front = 0;
        self.rear = len;
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue {
            buf: self.buf.clone(),
            front: self.front,
            rear: self.rear,
        }
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &DebugList(self.iter()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

/// Writes the elements from front to rear separated by commas, e.g. `1,2,3`.
impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, self.iter())
    }
}
