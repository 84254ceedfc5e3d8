#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_fifo_and_growth() {
    let mut queue = Queue::new();
    assert_eq!(queue.cap(), 8);
    for i in 0..8 {
        assert!(queue.add(i));
    }
    assert_eq!(queue.cap(), 8, "Filling the Queue exactly shouldn't grow it.");

    queue.add(8);
    assert_eq!(queue.cap(), 16, "Adding to a full Queue should double the capacity.");
    assert_eq!(queue.len(), 9);

    for i in 0..=8 {
        assert_eq!(queue.pop(), Some(i), "Elements should be popped in the order they were added.");
    }
    assert_eq!(queue.pop(), None);
    assert_eq!(queue.cap(), 16, "Capacity should never shrink.");
}

#[test]
fn test_wrap_around() {
    let mut queue = Queue::with_cap(4);
    for i in 0..3 {
        queue.add(i);
    }
    assert_eq!(queue.pop(), Some(0));
    assert_eq!(queue.pop(), Some(1));

    // The rear cursor wraps past the end of the buffer here.
    for i in 3..7 {
        queue.add(i);
    }
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.cap(), 8, "Growth should happen once the wrapped Queue is full.");
    assert_eq!(queue.iter().copied().collect::<Queue<_>>().to_string(), "2,3,4,5,6");
    assert_eq!(queue.iter().rev().next(), Some(&6));

    let mut queue: Queue<u8> = Queue::with_cap(0);
    queue.add(1);
    queue.add(2);
    assert_eq!(queue.cap(), 2);
    assert_eq!(queue.get_first(), Some(&1));
}

#[test]
fn test_peek_and_for_each() {
    let mut queue: Queue<char> = Queue::new();
    assert_eq!(queue.get_first(), None);
    queue.for_each(|_, _, _| panic!("for_each shouldn't call back on an empty Queue."));

    queue.extend(['a', 'b', 'c']);
    assert_eq!(queue.get_first(), Some(&'a'));
    assert_eq!(queue.len(), 3, "Peeking shouldn't remove anything.");

    let mut seen = String::new();
    queue.for_each(|value, index, queue| {
        assert_eq!(queue.iter().nth(index), Some(value));
        seen.push(*value);
    });
    assert_eq!(seen, "abc");
}

#[test]
fn test_clone_and_drop() {
    let queue: Queue<_> = (0..10).collect();
    let cloned = queue.clone();
    assert_eq!(queue, cloned);
    assert_eq!(cloned.into_iter().collect::<Queue<_>>(), queue);
    assert_eq!(format!("{queue:?}"), "Queue { contents: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9], len: 10, cap: 16 }");

    let counter = CountedDrop::new(0);
    let mut queue: Queue<_> = iter::repeat_with(|| counter.clone()).take(5).collect();
    drop(queue.pop());
    assert_eq!(*counter.borrow(), 1);
    drop(queue);
    assert_eq!(counter.take(), 5, "Dropping the Queue should drop the remaining elements.");

    let counter = CountedDrop::new(0);
    let mut queue: Queue<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(counter.take(), 4);
}

#[test]
fn test_impossible_capacity() {
    let error = std::panic::catch_unwind(|| Queue::<u8>::with_cap(usize::MAX))
        .expect_err("A capacity with no room for the spare slot should panic.");
    assert_eq!(
        error.downcast_ref::<String>().map(String::as_str),
        Some("Capacity overflow!"),
        "The spare slot shouldn't wrap the slot count around to zero."
    );

    assert_panics!({
        Queue::<u64>::with_cap(usize::MAX / 2);
    });

    let queue: Queue<u8> = Queue::with_cap(0);
    assert_eq!(queue.cap(), 0);
    assert_eq!(queue.len(), 0);
}
